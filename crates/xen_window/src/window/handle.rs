//! The application-facing window
//!
//! A [`Window`] exclusively owns one native window with its OpenGL context,
//! an owned copy of its title, the last known client-area size and one
//! callback slot per event kind. It also holds a lease on the process-wide
//! windowing subsystem, so the subsystem outlives every window built on it.
//!
//! # Geometry
//!
//! `width`/`height` change in two ways that never synchronize on their own:
//!
//! - The setters ([`set_width`](Window::set_width),
//!   [`set_height`](Window::set_height),
//!   [`set_dimensions`](Window::set_dimensions)) store the new size and ask
//!   the platform to resize. They do not fire the resize callback.
//! - Resize events from the platform (the user dragging a border) fire the
//!   resize callback only. A callback that wants the stored size to follow
//!   must call a setter itself.
//!
//! # Callbacks
//!
//! Callbacks run synchronously inside [`poll_events`](Window::poll_events)
//! on the polling thread and receive `&mut Window`, so they can read and
//! mutate the window that produced the event. A slot holds at most one
//! callback; registering replaces.

use super::backend::{check_title, HandleDescriptor, NativeHandle, Platform, MAX_EXTENT};
use super::callbacks::{
    Callback, CallbackTable, CursorPositionCallback, KeyCallback, MouseButtonCallback,
    ResizeCallback, ScrollCallback, Slot,
};
use super::events::{
    CursorPositionEvent, KeyEvent, MouseButtonEvent, ResizeEvent, ScrollEvent, WindowEvent,
};
use super::glfw_backend::GlfwPlatform;
use super::subsystem::{Subsystem, SubsystemRegistry};
use super::WindowResult;
use crate::config::WindowConfig;

/// A native window with its graphics context and event callbacks
///
/// Dropping a window (or calling [`destroy`](Self::destroy)) destroys the
/// native window first and then releases its subsystem lease.
pub struct Window<P: Platform = GlfwPlatform> {
    title: String,
    width: u32,
    height: u32,
    callbacks: CallbackTable<P>,
    // Declared before `subsystem` so the native window is destroyed first.
    handle: P::Handle,
    subsystem: Subsystem<P>,
}

impl Window<GlfwPlatform> {
    /// Create a GLFW window from `config`
    ///
    /// See [`create_with`](Self::create_with) for the contract and failure
    /// behavior.
    pub fn create(config: &WindowConfig) -> WindowResult<Self> {
        GlfwPlatform::with_registry(|registry| Self::create_with(registry, config))
    }
}

impl<P: Platform> Window<P> {
    /// Create a window on the subsystem managed by `registry`
    ///
    /// The title is copied; later changes to the caller's string do not
    /// affect the window. The new context is made current on the calling
    /// thread and its swap interval set from `config.context`.
    ///
    /// # Panics
    /// If `config.width` or `config.height` is zero or above [`MAX_EXTENT`].
    /// Callers validate configuration first (see [`WindowConfig::validate`]).
    ///
    /// # Errors
    /// A title with a NUL byte is rejected before the subsystem is touched.
    /// Title allocation, subsystem initialization and native window creation
    /// failures are logged and returned. Anything acquired before the failing
    /// step has already been released when this returns.
    pub fn create_with(
        registry: &SubsystemRegistry<P>,
        config: &WindowConfig,
    ) -> WindowResult<Self> {
        assert_extent(config.width, "width");
        assert_extent(config.height, "height");

        let title = copy_checked_title(registry.platform(), &config.title)?;

        let subsystem = registry.acquire().map_err(|err| {
            log::error!("Failed to initialize windowing subsystem: {err}");
            err
        })?;

        let descriptor = HandleDescriptor {
            title: &title,
            width: config.width,
            height: config.height,
            resizable: config.resizable,
            context: &config.context,
        };
        let mut handle = subsystem
            .with_context(|platform, context| platform.create_handle(context, &descriptor))
            .map_err(|err| {
                log::error!("Failed to create native window: {err}");
                err
            })?;

        handle.make_current();
        let interval = config.context.swap_interval();
        subsystem.with_context(|platform, context| platform.set_swap_interval(context, interval));

        log::info!(
            "Created window '{}' ({}x{}, OpenGL {}.{} {:?}, vsync {})",
            title,
            config.width,
            config.height,
            config.context.version_major,
            config.context.version_minor,
            config.context.profile,
            if config.context.vsync { "on" } else { "off" },
        );

        Ok(Self {
            title,
            width: config.width,
            height: config.height,
            callbacks: CallbackTable::default(),
            handle,
            subsystem,
        })
    }

    /// Destroy the window
    ///
    /// The native window is destroyed and the subsystem lease released; the
    /// subsystem terminates if this was the last window.
    pub fn destroy(self) {
        drop(self);
    }

    /// Current title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Last known client-area width
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Last known client-area height
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Last known client-area size as `(width, height)`
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The native window
    pub const fn handle(&self) -> &P::Handle {
        &self.handle
    }

    /// The native window, mutably
    pub fn handle_mut(&mut self) -> &mut P::Handle {
        &mut self.handle
    }

    /// The platform this window was created on
    pub fn platform(&self) -> &P {
        self.subsystem.platform()
    }

    /// Change the window title
    ///
    /// The new owned copy is allocated before the native title changes, so on
    /// failure both keep the previous title.
    ///
    /// # Errors
    /// [`WindowError::InvalidTitle`](super::WindowError::InvalidTitle) if
    /// `title` contains a NUL byte,
    /// [`WindowError::TitleAllocation`](super::WindowError::TitleAllocation)
    /// if the copy cannot be allocated.
    pub fn set_title(&mut self, title: &str) -> WindowResult<()> {
        let owned = copy_checked_title(self.subsystem.platform(), title)?;

        self.handle.set_title(&owned);
        self.title = owned;
        Ok(())
    }

    /// Set the width and resize the native window to match
    ///
    /// # Panics
    /// If `width` is zero or above [`MAX_EXTENT`].
    pub fn set_width(&mut self, width: u32) {
        assert_extent(width, "width");
        self.width = width;
        self.apply_size();
    }

    /// Set the height and resize the native window to match
    ///
    /// # Panics
    /// If `height` is zero or above [`MAX_EXTENT`].
    pub fn set_height(&mut self, height: u32) {
        assert_extent(height, "height");
        self.height = height;
        self.apply_size();
    }

    /// Set both dimensions and resize the native window to match
    ///
    /// # Panics
    /// If either dimension is zero or above [`MAX_EXTENT`].
    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        assert_extent(width, "width");
        assert_extent(height, "height");
        self.width = width;
        self.height = height;
        self.apply_size();
    }

    fn apply_size(&mut self) {
        log::debug!("Resizing window '{}' to {}x{}", self.title, self.width, self.height);
        self.handle.set_size(self.width, self.height);
    }

    /// Register the key callback, replacing any previous one
    pub fn set_key_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&mut Self, KeyEvent) + 'static,
    {
        let callback: KeyCallback<P> = Box::new(callback);
        register(self.callbacks.key_slot(), callback, "key");
    }

    /// Register the mouse button callback, replacing any previous one
    pub fn set_mouse_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&mut Self, MouseButtonEvent) + 'static,
    {
        let callback: MouseButtonCallback<P> = Box::new(callback);
        register(self.callbacks.mouse_button_slot(), callback, "mouse button");
    }

    /// Register the scroll callback, replacing any previous one
    pub fn set_mouse_scroll_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&mut Self, ScrollEvent) + 'static,
    {
        let callback: ScrollCallback<P> = Box::new(callback);
        register(self.callbacks.scroll_slot(), callback, "scroll");
    }

    /// Register the resize callback, replacing any previous one
    pub fn set_resize_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&mut Self, ResizeEvent) + 'static,
    {
        let callback: ResizeCallback<P> = Box::new(callback);
        register(self.callbacks.resize_slot(), callback, "resize");
    }

    /// Register the cursor position callback, replacing any previous one
    pub fn set_cursor_position_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&mut Self, CursorPositionEvent) + 'static,
    {
        let callback: CursorPositionCallback<P> = Box::new(callback);
        register(self.callbacks.cursor_position_slot(), callback, "cursor position");
    }

    /// Remove the key callback; returns whether one was registered
    pub fn clear_key_callback(&mut self) -> bool {
        self.callbacks.key_slot().clear()
    }

    /// Remove the mouse button callback; returns whether one was registered
    pub fn clear_mouse_callback(&mut self) -> bool {
        self.callbacks.mouse_button_slot().clear()
    }

    /// Remove the scroll callback; returns whether one was registered
    pub fn clear_mouse_scroll_callback(&mut self) -> bool {
        self.callbacks.scroll_slot().clear()
    }

    /// Remove the resize callback; returns whether one was registered
    pub fn clear_resize_callback(&mut self) -> bool {
        self.callbacks.resize_slot().clear()
    }

    /// Remove the cursor position callback; returns whether one was registered
    pub fn clear_cursor_position_callback(&mut self) -> bool {
        self.callbacks.cursor_position_slot().clear()
    }

    /// Process pending platform events
    ///
    /// Polls the subsystem, then hands each event this window received to its
    /// callback, in arrival order. Events without a registered callback are
    /// dropped.
    pub fn poll_events(&mut self) {
        self.subsystem.with_context(|platform, context| platform.poll_events(context));

        for event in self.handle.drain_events() {
            self.dispatch_event(event);
        }
    }

    /// Deliver one event to its callback
    ///
    /// Returns whether a callback was registered for it.
    pub fn dispatch_event(&mut self, event: WindowEvent) -> bool {
        log::trace!("Dispatching {event:?}");
        match event {
            WindowEvent::Key(event) => self.fire(CallbackTable::key_slot, event),
            WindowEvent::MouseButton(event) => self.fire(CallbackTable::mouse_button_slot, event),
            WindowEvent::Scroll(event) => self.fire(CallbackTable::scroll_slot, event),
            WindowEvent::CursorPosition(event) => {
                self.fire(CallbackTable::cursor_position_slot, event)
            }
            WindowEvent::Resize(event) => self.fire(CallbackTable::resize_slot, event),
        }
    }

    /// Forward a resize to the resize callback
    ///
    /// The stored dimensions are left alone, exactly as for a resize reported
    /// by the platform.
    pub fn dispatch_resize(&mut self, width: u32, height: u32) -> bool {
        self.dispatch_event(WindowEvent::Resize(ResizeEvent { width, height }))
    }

    fn fire<E>(
        &mut self,
        select: fn(&mut CallbackTable<P>) -> &mut Slot<Callback<P, E>>,
        event: E,
    ) -> bool {
        let Some((mut callback, generation)) = select(&mut self.callbacks).take() else {
            return false;
        };
        callback(self, event);
        select(&mut self.callbacks).restore(callback, generation);
        true
    }

    /// Whether a close has been requested
    pub fn should_close(&self) -> bool {
        self.handle.should_close()
    }

    /// Request or cancel closing the window
    pub fn set_should_close(&mut self, should_close: bool) {
        self.handle.set_should_close(should_close);
    }

    /// Present the back buffer
    pub fn swap_buffers(&mut self) {
        self.handle.swap_buffers();
    }
}

#[track_caller]
fn assert_extent(value: u32, axis: &str) {
    assert!(value > 0, "window {axis} must be greater than 0 ({axis} <= 0)");
    assert!(
        value <= MAX_EXTENT,
        "window {axis} {value} exceeds the platform limit of {MAX_EXTENT}"
    );
}

fn copy_checked_title<P: Platform>(platform: &P, title: &str) -> WindowResult<String> {
    check_title(title)
        .and_then(|()| platform.copy_title(title))
        .map_err(|err| {
            log::error!("Failed to copy window title: {err}");
            err
        })
}

fn register<F>(slot: &mut Slot<F>, callback: F, kind: &str) {
    if slot.is_set() {
        log::debug!("Replacing {kind} callback");
    } else {
        log::debug!("Registering {kind} callback");
    }
    slot.set(callback);
}

impl<P: Platform> Drop for Window<P> {
    fn drop(&mut self) {
        log::info!("Destroying window '{}'", self.title);
    }
}
