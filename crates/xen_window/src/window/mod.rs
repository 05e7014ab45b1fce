//! Window management subsystem
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Application Code            │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!         ┌─────▼─────┐
//!         │  Window   │ ← Public API (handle.rs)
//!         └─────┬─────┘
//!               │ Leases          Owns
//!      ┌────────▼────────┐   ┌──────────────┐
//!      │ Subsystem       │   │ NativeHandle │ ← backend.rs
//!      │ (subsystem.rs)  │   └──────▲───────┘
//!      └────────┬────────┘          │
//!               │ Drives            │ Creates
//!      ┌────────▼───────────────────┴──┐
//!      │ Platform trait (backend.rs)   │
//!      │  └ GlfwPlatform (glfw_backend)│
//!      └───────────────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - **`handle`**: The [`Window`] type applications use
//! - **`backend`**: Traits a windowing library must implement
//! - **`subsystem`**: Reference-counted lifetime of the process-wide library state
//! - **`callbacks`**: Per-event-kind callback slots
//! - **`events`**: Event payloads
//! - **`glfw_backend`**: The GLFW implementation

pub mod backend;
mod callbacks;
pub mod events;
pub mod glfw_backend;
pub mod handle;
pub mod subsystem;

#[cfg(test)]
pub(crate) mod mock;

use thiserror::Error;

pub use backend::{check_title, HandleDescriptor, NativeHandle, Platform, MAX_EXTENT};
pub use callbacks::{
    Callback, CursorPositionCallback, KeyCallback, MouseButtonCallback, ResizeCallback,
    ScrollCallback,
};
pub use events::{
    CursorPositionEvent, KeyEvent, MouseButtonEvent, ResizeEvent, ScrollEvent, WindowEvent,
};
pub use glfw_backend::{GlfwHandle, GlfwPlatform};
pub use handle::Window;
pub use subsystem::{Subsystem, SubsystemRegistry};

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The windowing subsystem could not be initialized
    #[error("Windowing subsystem initialization failed")]
    InitializationFailed,

    /// The native window or its context could not be created
    #[error("Window creation failed")]
    CreationFailed,

    /// No memory for an owned copy of a title
    #[error("Failed to allocate a {len}-byte title buffer")]
    TitleAllocation {
        /// Length of the title that could not be copied
        len: usize,
    },

    /// The title cannot be passed to the platform as a C string
    #[error("Window title contains a NUL byte at offset {position}")]
    InvalidTitle {
        /// Byte offset of the first NUL
        position: usize,
    },
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;
