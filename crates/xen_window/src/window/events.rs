//! Window event payloads delivered to registered callbacks

use crate::input::{Action, KeyCode, Modifiers, MouseButton};

/// A key changed state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Logical key
    pub key: KeyCode,
    /// Platform-specific scancode
    pub scancode: i32,
    /// Press, release or repeat
    pub action: Action,
    /// Modifiers held at the time
    pub modifiers: Modifiers,
}

/// A mouse button changed state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonEvent {
    /// Button that changed
    pub button: MouseButton,
    /// Press or release
    pub action: Action,
    /// Modifiers held at the time
    pub modifiers: Modifiers,
}

/// Scroll wheel or touchpad scroll offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    /// Horizontal offset
    pub x_offset: f64,
    /// Vertical offset
    pub y_offset: f64,
}

/// Cursor position relative to the top-left of the client area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorPositionEvent {
    /// Horizontal position in screen coordinates
    pub x: f64,
    /// Vertical position in screen coordinates
    pub y: f64,
}

/// The client area changed size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeEvent {
    /// New client-area width
    pub width: u32,
    /// New client-area height
    pub height: u32,
}

/// Any event a native window can report
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    /// Keyboard input
    Key(KeyEvent),
    /// Mouse button input
    MouseButton(MouseButtonEvent),
    /// Scroll input
    Scroll(ScrollEvent),
    /// Cursor movement
    CursorPosition(CursorPositionEvent),
    /// Client area resized
    Resize(ResizeEvent),
}
