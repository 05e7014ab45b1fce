//! Foundation module - Core utilities shared by the window layer
//!
//! - Logging setup

pub mod logging;
