//! Platform abstraction for the window manager
//!
//! The window manager never talks to a windowing library directly. It goes
//! through two traits: [`Platform`] for the process-wide subsystem and
//! [`NativeHandle`] for a single native window with its context. The GLFW
//! implementation lives in [`glfw_backend`](super::glfw_backend); tests plug in
//! a mock.

use crate::config::ContextConfig;

use super::{WindowError, WindowEvent, WindowResult};

/// Largest width or height a native window accepts
///
/// Windowing libraries take sizes as signed 32-bit integers.
pub const MAX_EXTENT: u32 = 0x7FFF_FFFF;

/// Check that `title` can be handed to the platform
///
/// Native titles are C strings, so an interior NUL cannot be represented.
///
/// # Errors
/// [`WindowError::InvalidTitle`] with the offset of the first NUL byte.
pub fn check_title(title: &str) -> WindowResult<()> {
    match title.bytes().position(|byte| byte == 0) {
        Some(position) => Err(WindowError::InvalidTitle { position }),
        None => Ok(()),
    }
}

/// Everything the platform needs to create one native window
#[derive(Debug, Clone, Copy)]
pub struct HandleDescriptor<'a> {
    /// Initial title
    pub title: &'a str,
    /// Client-area width in pixels
    pub width: u32,
    /// Client-area height in pixels
    pub height: u32,
    /// Whether the user may resize the window
    pub resizable: bool,
    /// Graphics context to attach
    pub context: &'a ContextConfig,
}

/// A process-wide windowing subsystem
///
/// # Thread Safety
/// Windowing libraries generally require every call to come from the main
/// thread, so none of these types are required to be `Send`.
pub trait Platform: Sized + 'static {
    /// Live subsystem state, obtained from [`initialize`](Self::initialize)
    type Context;

    /// Native window type produced by this platform
    type Handle: NativeHandle;

    /// Bring up the windowing subsystem
    fn initialize(&self) -> WindowResult<Self::Context>;

    /// Tear the subsystem down
    ///
    /// Called exactly once per successful [`initialize`](Self::initialize),
    /// after every handle created from the context has been dropped. The
    /// context itself is dropped right after this returns.
    fn terminate(&self, context: &mut Self::Context);

    /// Create a native window with its graphics context
    fn create_handle(
        &self,
        context: &mut Self::Context,
        descriptor: &HandleDescriptor<'_>,
    ) -> WindowResult<Self::Handle>;

    /// Process pending events for every window of this subsystem
    fn poll_events(&self, context: &mut Self::Context);

    /// Set the buffer swap interval of the current context
    fn set_swap_interval(&self, context: &mut Self::Context, interval: u32);

    /// Make an owned copy of a window title
    ///
    /// Allocation failure is reported instead of aborting the process.
    fn copy_title(&self, title: &str) -> WindowResult<String> {
        let mut owned = String::new();
        owned
            .try_reserve_exact(title.len())
            .map_err(|_| WindowError::TitleAllocation { len: title.len() })?;
        owned.push_str(title);
        Ok(owned)
    }
}

/// One native window and its graphics context
///
/// Dropping the handle destroys the native window.
pub trait NativeHandle {
    /// Change the title shown by the window system
    fn set_title(&mut self, title: &str);

    /// Request a new client-area size
    fn set_size(&mut self, width: u32, height: u32);

    /// Client-area size as reported by the platform
    fn size(&self) -> (u32, u32);

    /// Bind this window's context to the calling thread
    fn make_current(&mut self);

    /// Whether a close has been requested
    fn should_close(&self) -> bool;

    /// Request or cancel closing the window
    fn set_should_close(&mut self, should_close: bool);

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Take every event received since the last call
    fn drain_events(&mut self) -> Vec<WindowEvent>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::mock::MockHandle;

    /// Platform that keeps every provided method
    struct BarePlatform;

    impl Platform for BarePlatform {
        type Context = ();
        type Handle = MockHandle;

        fn initialize(&self) -> WindowResult<()> {
            Ok(())
        }

        fn terminate(&self, _context: &mut ()) {}

        fn create_handle(
            &self,
            _context: &mut (),
            _descriptor: &HandleDescriptor<'_>,
        ) -> WindowResult<MockHandle> {
            Err(WindowError::CreationFailed)
        }

        fn poll_events(&self, _context: &mut ()) {}

        fn set_swap_interval(&self, _context: &mut (), _interval: u32) {}
    }

    #[test]
    fn test_default_copy_title_is_an_owned_copy() {
        let title = String::from("XenC Window");
        let copy = BarePlatform.copy_title(&title).unwrap();

        assert_eq!(copy, title);
        assert_ne!(copy.as_ptr(), title.as_ptr());
        assert!(copy.capacity() >= title.len());
    }

    #[test]
    fn test_default_copy_title_of_empty_title() {
        assert_eq!(BarePlatform.copy_title("").unwrap(), "");
    }

    #[test]
    fn test_check_title_reports_first_nul() {
        assert!(check_title("XenC Window").is_ok());
        assert!(matches!(check_title("\0a\0"), Err(WindowError::InvalidTitle { position: 0 })));
    }
}
