/// Showcase configuration
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::print::ROW_HEIGHT;
use crate::projection::{OrthographicParams, PerspectiveParams};
use crate::transform::ViewportParams;

/// Screen metrics used to place pixel-positioned text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Width of one character cell in pixels
    pub cell_width: u32,
    /// Height of one character cell in pixels
    pub cell_height: u32,
    pub target_fps: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            cell_width: 8,
            cell_height: ROW_HEIGHT as u32,
            target_fps: 60,
        }
    }
}

/// Everything one showcase frame needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub title: String,
    /// Vertical distance between matrix blocks, in printed rows
    pub block_spacing: i32,
    pub orthographic: OrthographicParams,
    pub perspective: PerspectiveParams,
    pub viewport: ViewportParams,
    pub screen: ScreenConfig,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            title: "matview".to_string(),
            block_spacing: 5,
            orthographic: OrthographicParams::default(),
            perspective: PerspectiveParams::default(),
            viewport: ViewportParams::default(),
            screen: ScreenConfig::default(),
        }
    }
}

impl ShowcaseConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = ShowcaseConfig::from_toml_str("").unwrap();
        assert_eq!(config, ShowcaseConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config = ShowcaseConfig::from_toml_str(
            r#"
            title = "projection demo"

            [viewport]
            left = 0.0
            top = 0.0
            width = 1280.0
            height = 720.0
            min_depth = 0.0
            max_depth = 1.0

            [screen]
            target_fps = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "projection demo");
        assert_eq!(config.viewport.width, 1280.0);
        assert_eq!(config.screen.target_fps, 30);
        assert_eq!(config.screen.cell_width, 8);
        assert_eq!(config.perspective, PerspectiveParams::default());
    }

    #[test]
    fn test_round_trip() {
        let mut config = ShowcaseConfig::default();
        config.perspective.fov_y = 1.2;
        let text = config.to_toml_string().unwrap();
        assert_eq!(ShowcaseConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = ShowcaseConfig::from_toml_str("title = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ShowcaseConfig::load_from_file("/nonexistent/matview.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
