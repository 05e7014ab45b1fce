//! # Xen Window
//!
//! The platform window layer of the XenC application skeleton. It owns one
//! native window with its OpenGL context, tracks the window geometry and
//! dispatches keyboard, mouse, scroll, cursor and resize events to callbacks
//! supplied by the application.
//!
//! ## Features
//!
//! - **GLFW Backend**: Native window and OpenGL 4.6 core context creation
//! - **Scoped Subsystem**: The process-wide windowing library is initialized on
//!   first window creation and terminated when the last window goes away
//! - **Callback Dispatch**: One callback per event kind, invoked synchronously
//!   from [`Window::poll_events`](window::Window::poll_events)
//! - **Configurable**: Window and context settings loadable from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use xen_window::prelude::*;
//!
//! fn main() -> Result<(), WindowError> {
//!     xen_window::foundation::logging::init();
//!
//!     let config = WindowConfig::new("XenC Window", 800, 600);
//!     let mut window = Window::create(&config)?;
//!
//!     window.set_key_callback(|window, event| {
//!         if event.key == KeyCode::Escape && event.action == Action::Press {
//!             window.set_should_close(true);
//!         }
//!     });
//!
//!     while !window.should_close() {
//!         window.poll_events();
//!         window.swap_buffers();
//!     }
//!
//!     window.destroy();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod input;
pub mod window;

/// Common imports for window users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, ContextConfig, ContextProfile, WindowConfig},
        input::{Action, KeyCode, Modifiers, MouseButton},
        window::{
            CursorPositionEvent, GlfwPlatform, KeyEvent, MouseButtonEvent, ResizeEvent,
            ScrollEvent, Window, WindowError, WindowEvent, WindowResult,
        },
    };
}
