//! # Window Configuration
//!
//! Settings consumed once by [`Window::create`](crate::window::Window::create).
//! A configuration is never mutated by the window; the window keeps its own
//! copy of everything it needs.

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};
use crate::window::backend::{check_title, MAX_EXTENT};

/// OpenGL context profile requested from the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContextProfile {
    /// Core profile, no deprecated functionality
    Core,
    /// Compatibility profile
    Compatibility,
    /// Let the platform decide
    Any,
}

/// # Context Configuration
///
/// Graphics context version, profile and presentation settings. The defaults
/// target an OpenGL 4.6 core context with vertical sync enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Requested context major version
    pub version_major: u32,
    /// Requested context minor version
    pub version_minor: u32,
    /// Requested context profile
    pub profile: ContextProfile,
    /// Request a forward-compatible context (required on macOS for core profiles)
    pub forward_compat: bool,
    /// Wait for one display refresh on each buffer swap
    pub vsync: bool,
}

impl ContextConfig {
    /// Swap interval handed to the platform after the context is made current
    pub const fn swap_interval(&self) -> u32 {
        if self.vsync {
            1
        } else {
            0
        }
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            version_major: 4,
            version_minor: 6,
            profile: ContextProfile::Core,
            forward_compat: cfg!(target_os = "macos"),
            vsync: true,
        }
    }
}

/// # Window Configuration
///
/// Title, client-area size and resizability of the window to create, plus the
/// graphics context it should carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Client-area width in pixels, must be non-zero
    pub width: u32,
    /// Client-area height in pixels, must be non-zero
    pub height: u32,
    /// Whether the user may resize the window
    pub resizable: bool,
    /// Graphics context settings
    pub context: ContextConfig,
}

impl WindowConfig {
    /// Create a resizable window configuration with the default context
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            resizable: true,
            context: ContextConfig::default(),
        }
    }

    /// Set whether the window can be resized by the user
    #[must_use]
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Set custom context configuration
    #[must_use]
    pub fn with_context(mut self, context: ContextConfig) -> Self {
        self.context = context;
        self
    }

    /// Validate the configuration
    ///
    /// Window creation treats zero or oversized dimensions as a programming
    /// error and aborts, so configurations read from files should pass
    /// through here first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("window {axis} must be greater than 0")));
            }
            if value > MAX_EXTENT {
                return Err(ConfigError::Invalid(format!(
                    "window {axis} {value} exceeds {MAX_EXTENT}"
                )));
            }
        }
        check_title(&self.title).map_err(|err| ConfigError::Invalid(err.to_string()))?;
        if self.context.version_major == 0 {
            return Err(ConfigError::Invalid(
                "context major version must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new("XenC Window", 800, 600)
    }
}

impl Config for WindowConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_targets_gl_46_core() {
        let context = ContextConfig::default();
        assert_eq!((context.version_major, context.version_minor), (4, 6));
        assert_eq!(context.profile, ContextProfile::Core);
        assert!(context.vsync);
        assert_eq!(context.swap_interval(), 1);
    }

    #[test]
    fn test_vsync_off_swap_interval() {
        let context = ContextConfig {
            vsync: false,
            ..ContextConfig::default()
        };
        assert_eq!(context.swap_interval(), 0);
    }

    #[test]
    fn test_builder() {
        let config = WindowConfig::new("T", 800, 600).with_resizable(false);
        assert_eq!(config.title, "T");
        assert_eq!((config.width, config.height), (800, 600));
        assert!(!config.resizable);
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        assert!(WindowConfig::new("T", 0, 600).validate().is_err());
        assert!(WindowConfig::new("T", 800, 0).validate().is_err());
        assert!(WindowConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_dimensions() {
        assert!(WindowConfig::new("T", MAX_EXTENT + 1, 600).validate().is_err());
        assert!(WindowConfig::new("T", 800, u32::MAX).validate().is_err());
        assert!(WindowConfig::new("T", MAX_EXTENT, MAX_EXTENT).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nul_in_title() {
        let result = WindowConfig::new("a\0b", 800, 600).validate();
        assert!(matches!(result, Err(ConfigError::Invalid(message)) if message.contains("NUL")));
    }
}
