//! TOML-backed application configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings for the window an [`crate::application::run`] loop drives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window title
    pub title: String,
    /// Content area width in screen coordinates
    pub width: u32,
    /// Content area height in screen coordinates
    pub height: u32,
    /// Whether the window can be resized by the user
    pub resizable: bool,
    /// Buffer swap interval; 1 enables vsync
    pub swap_interval: i32,
    /// Run fullscreen on the primary monitor
    pub fullscreen: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "rust_glfw".to_string(),
            width: 800,
            height: 600,
            resizable: true,
            swap_interval: 1,
            fullscreen: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to a TOML file.
    pub fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(Error, Debug)]
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.swap_interval, 1);
        assert!(config.resizable);
        assert!(!config.fullscreen);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig {
            title: "demo".to_string(),
            width: 1280,
            height: 720,
            resizable: false,
            swap_interval: 0,
            fullscreen: true,
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.title, "demo");
        assert_eq!(parsed.width, 1280);
        assert!(!parsed.resizable);
        assert!(parsed.fullscreen);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: AppConfig = toml::from_str("title = \"partial\"\n").unwrap();
        assert_eq!(parsed.title, "partial");
        assert_eq!(parsed.width, 800);
        assert_eq!(parsed.swap_interval, 1);
    }
}
