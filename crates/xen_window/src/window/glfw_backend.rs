//! Window management using GLFW
//!
//! Provides native window and OpenGL context creation plus event polling.
//!
//! GLFW reference counts its own initialization: every `glfw::Glfw` token,
//! including the one each `glfw::PWindow` carries, keeps the library alive,
//! and `glfwTerminate` runs when the last token is dropped. The subsystem
//! lease holds one token and each window holds another, so termination
//! always follows window destruction.

use glfw::Context as _;

use super::backend::{HandleDescriptor, NativeHandle, Platform};
use super::events::{
    CursorPositionEvent, KeyEvent, MouseButtonEvent, ResizeEvent, ScrollEvent, WindowEvent,
};
use super::subsystem::SubsystemRegistry;
use super::{WindowError, WindowResult};
use crate::config::ContextProfile;
use crate::input::{Action, KeyCode, Modifiers, MouseButton};

thread_local! {
    static GLFW_SUBSYSTEM: SubsystemRegistry<GlfwPlatform> = SubsystemRegistry::new(GlfwPlatform);
}

/// The GLFW windowing subsystem
#[derive(Debug, Clone, Copy, Default)]
pub struct GlfwPlatform;

impl GlfwPlatform {
    /// Run `f` with the GLFW subsystem registry
    ///
    /// GLFW must be driven from the main thread; the registry used by
    /// [`Window::create`](super::Window::create) is the one belonging to the
    /// calling thread.
    pub fn with_registry<R>(f: impl FnOnce(&SubsystemRegistry<Self>) -> R) -> R {
        GLFW_SUBSYSTEM.with(f)
    }
}

/// GLFW window wrapper with its event receiver
pub struct GlfwHandle {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl GlfwHandle {
    /// The underlying GLFW window
    pub fn window(&self) -> &glfw::PWindow {
        &self.window
    }

    /// The underlying GLFW window, mutably
    pub fn window_mut(&mut self) -> &mut glfw::PWindow {
        &mut self.window
    }

    /// Framebuffer size in pixels, which differs from the window size on
    /// high-DPI displays
    pub fn framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (to_extent(width), to_extent(height))
    }
}

impl Platform for GlfwPlatform {
    type Context = glfw::Glfw;
    type Handle = GlfwHandle;

    fn initialize(&self) -> WindowResult<glfw::Glfw> {
        glfw::init(|error: glfw::Error, description: String| {
            log::error!("GLFW error {error:?}: {description}");
        })
        .map_err(|err| {
            log::debug!("glfw::init returned {err:?}");
            WindowError::InitializationFailed
        })
    }

    fn terminate(&self, _glfw: &mut glfw::Glfw) {
        log::debug!("Releasing GLFW subsystem token");
    }

    fn create_handle(
        &self,
        glfw: &mut glfw::Glfw,
        descriptor: &HandleDescriptor<'_>,
    ) -> WindowResult<GlfwHandle> {
        let context = descriptor.context;

        glfw.default_window_hints();
        glfw.window_hint(glfw::WindowHint::ContextVersion(
            context.version_major,
            context.version_minor,
        ));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(match context.profile {
            ContextProfile::Core => glfw::OpenGlProfileHint::Core,
            ContextProfile::Compatibility => glfw::OpenGlProfileHint::Compat,
            ContextProfile::Any => glfw::OpenGlProfileHint::Any,
        }));
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(context.forward_compat));
        glfw.window_hint(glfw::WindowHint::Resizable(descriptor.resizable));

        let (mut window, events) = glfw
            .create_window(
                descriptor.width,
                descriptor.height,
                descriptor.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(WindowError::CreationFailed)?;

        // Set up event polling
        window.set_key_polling(true);
        window.set_mouse_button_polling(true);
        window.set_scroll_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_size_polling(true);

        Ok(GlfwHandle { window, events })
    }

    fn poll_events(&self, glfw: &mut glfw::Glfw) {
        glfw.poll_events();
    }

    fn set_swap_interval(&self, glfw: &mut glfw::Glfw, interval: u32) {
        let interval = if interval == 0 {
            glfw::SwapInterval::None
        } else {
            glfw::SwapInterval::Sync(interval)
        };
        glfw.set_swap_interval(interval);
    }
}

impl NativeHandle for GlfwHandle {
    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.window.set_size(to_coordinate(width), to_coordinate(height));
    }

    fn size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (to_extent(width), to_extent(height))
    }

    fn make_current(&mut self) {
        self.window.make_current();
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn drain_events(&mut self) -> Vec<WindowEvent> {
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| translate_event(event))
            .collect()
    }
}

fn to_coordinate(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn to_extent(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

/// Convert a GLFW event into the crate's event type
///
/// Returns `None` for event kinds the window manager does not dispatch.
pub fn translate_event(event: glfw::WindowEvent) -> Option<WindowEvent> {
    let event = match event {
        glfw::WindowEvent::Key(key, scancode, action, mods) => WindowEvent::Key(KeyEvent {
            key: translate_key(key),
            scancode,
            action: translate_action(action),
            modifiers: translate_modifiers(mods),
        }),
        glfw::WindowEvent::MouseButton(button, action, mods) => {
            WindowEvent::MouseButton(MouseButtonEvent {
                button: translate_mouse_button(button),
                action: translate_action(action),
                modifiers: translate_modifiers(mods),
            })
        }
        glfw::WindowEvent::Scroll(x_offset, y_offset) => {
            WindowEvent::Scroll(ScrollEvent { x_offset, y_offset })
        }
        glfw::WindowEvent::CursorPos(x, y) => {
            WindowEvent::CursorPosition(CursorPositionEvent { x, y })
        }
        glfw::WindowEvent::Size(width, height) => WindowEvent::Resize(ResizeEvent {
            width: to_extent(width),
            height: to_extent(height),
        }),
        _ => return None,
    };
    Some(event)
}

fn translate_key(key: glfw::Key) -> KeyCode {
    use glfw::Key;

    match key {
        Key::A => KeyCode::A,
        Key::B => KeyCode::B,
        Key::C => KeyCode::C,
        Key::D => KeyCode::D,
        Key::E => KeyCode::E,
        Key::F => KeyCode::F,
        Key::G => KeyCode::G,
        Key::H => KeyCode::H,
        Key::I => KeyCode::I,
        Key::J => KeyCode::J,
        Key::K => KeyCode::K,
        Key::L => KeyCode::L,
        Key::M => KeyCode::M,
        Key::N => KeyCode::N,
        Key::O => KeyCode::O,
        Key::P => KeyCode::P,
        Key::Q => KeyCode::Q,
        Key::R => KeyCode::R,
        Key::S => KeyCode::S,
        Key::T => KeyCode::T,
        Key::U => KeyCode::U,
        Key::V => KeyCode::V,
        Key::W => KeyCode::W,
        Key::X => KeyCode::X,
        Key::Y => KeyCode::Y,
        Key::Z => KeyCode::Z,
        Key::Num0 => KeyCode::Num0,
        Key::Num1 => KeyCode::Num1,
        Key::Num2 => KeyCode::Num2,
        Key::Num3 => KeyCode::Num3,
        Key::Num4 => KeyCode::Num4,
        Key::Num5 => KeyCode::Num5,
        Key::Num6 => KeyCode::Num6,
        Key::Num7 => KeyCode::Num7,
        Key::Num8 => KeyCode::Num8,
        Key::Num9 => KeyCode::Num9,
        Key::Space => KeyCode::Space,
        Key::Enter => KeyCode::Enter,
        Key::Escape => KeyCode::Escape,
        Key::Tab => KeyCode::Tab,
        Key::Backspace => KeyCode::Backspace,
        Key::Up => KeyCode::Up,
        Key::Down => KeyCode::Down,
        Key::Left => KeyCode::Left,
        Key::Right => KeyCode::Right,
        Key::F1 => KeyCode::Function(1),
        Key::F2 => KeyCode::Function(2),
        Key::F3 => KeyCode::Function(3),
        Key::F4 => KeyCode::Function(4),
        Key::F5 => KeyCode::Function(5),
        Key::F6 => KeyCode::Function(6),
        Key::F7 => KeyCode::Function(7),
        Key::F8 => KeyCode::Function(8),
        Key::F9 => KeyCode::Function(9),
        Key::F10 => KeyCode::Function(10),
        Key::F11 => KeyCode::Function(11),
        Key::F12 => KeyCode::Function(12),
        _ => KeyCode::Unknown,
    }
}

const fn translate_action(action: glfw::Action) -> Action {
    match action {
        glfw::Action::Press => Action::Press,
        glfw::Action::Release => Action::Release,
        glfw::Action::Repeat => Action::Repeat,
    }
}

const fn translate_mouse_button(button: glfw::MouseButton) -> MouseButton {
    match button {
        glfw::MouseButton::Button1 => MouseButton::Left,
        glfw::MouseButton::Button2 => MouseButton::Right,
        glfw::MouseButton::Button3 => MouseButton::Middle,
        glfw::MouseButton::Button4 => MouseButton::Other(4),
        glfw::MouseButton::Button5 => MouseButton::Other(5),
        glfw::MouseButton::Button6 => MouseButton::Other(6),
        glfw::MouseButton::Button7 => MouseButton::Other(7),
        glfw::MouseButton::Button8 => MouseButton::Other(8),
    }
}

fn translate_modifiers(mods: glfw::Modifiers) -> Modifiers {
    let mut modifiers = Modifiers::empty();
    if mods.contains(glfw::Modifiers::Shift) {
        modifiers |= Modifiers::SHIFT;
    }
    if mods.contains(glfw::Modifiers::Control) {
        modifiers |= Modifiers::CONTROL;
    }
    if mods.contains(glfw::Modifiers::Alt) {
        modifiers |= Modifiers::ALT;
    }
    if mods.contains(glfw::Modifiers::Super) {
        modifiers |= Modifiers::SUPER;
    }
    modifiers
}
