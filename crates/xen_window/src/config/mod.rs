//! Configuration system
//!
//! Window and context settings can be built in code or loaded from a TOML or
//! RON file. The file format is chosen from the path extension.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

mod window_config;

pub use window_config::{ContextConfig, ContextProfile, WindowConfig};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => {
                toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            ConfigFormat::Ron => {
                ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Ron,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values that parse but cannot be used
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(suffix: &str) -> NamedTempFile {
        tempfile::Builder::new().suffix(suffix).tempfile().unwrap()
    }

    #[test]
    fn test_load_toml_window_config() {
        let mut file = temp_file(".toml");
        writeln!(
            file,
            r#"
title = "From File"
width = 1024
height = 768
resizable = false
"#
        )
        .unwrap();

        let config = WindowConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.title, "From File");
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert!(!config.resizable);
        // Missing context table falls back to defaults
        assert_eq!(config.context, ContextConfig::default());
    }

    #[test]
    fn test_save_and_reload_ron() {
        let file = temp_file(".ron");
        let config = WindowConfig::new("Ron Window", 640, 480).with_resizable(false);

        config.save_to_file(file.path()).unwrap();
        let loaded = WindowConfig::load_from_file(file.path()).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = temp_file(".json");
        let result = WindowConfig::load_from_file(file.path());
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = WindowConfig::load_from_file("does/not/exist.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let mut file = temp_file(".toml");
        writeln!(file, "width = \"wide\"").unwrap();

        let result = WindowConfig::load_from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
