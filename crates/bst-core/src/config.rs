// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves layout, zoom and window settings from a TOML file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::tree::TreeKind;

/// Geometry used to place nodes, in unscaled surface units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Node circle radius
    pub node_radius: f32,
    /// Distance between consecutive in-order ranks
    pub horizontal_spacing: f32,
    /// Distance between consecutive depths
    pub vertical_spacing: f32,
    /// Empty border around the drawing
    pub margin: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            node_radius: 20.0,
            horizontal_spacing: 50.0,
            vertical_spacing: 70.0,
            margin: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    /// Factor applied per zoom step
    pub step: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            step: 1.25,
            min: 0.2,
            max: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
    pub min_height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 700.0,
            min_height: 550.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Largest image (width times height) an export may allocate
    pub max_pixels: u64,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            max_pixels: 50_000_000,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overrides the default `~/Documents/BSTVisualizer` data directory
    pub data_dir: Option<PathBuf>,
    /// Balancing scheme of the tree built in the window
    pub tree_kind: TreeKind,

    pub layout: LayoutSettings,
    pub zoom: ZoomSettings,
    pub window: WindowSettings,
    pub export: ExportSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Config {
    /// Get the default config file path (~/.config/bst-visualizer/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("bst-visualizer").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from `path`, or return the default config if the file is
    /// missing or unreadable
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring config {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Save config to a path
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_defaults() {
        let config: Config = toml::from_str("[zoom]\nstep = 2.0\n").unwrap();
        assert_eq!(config.zoom.step, 2.0);
        assert_eq!(config.zoom.max, ZoomSettings::default().max);
        assert_eq!(config.layout, LayoutSettings::default());
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg").join("config.toml");
        let mut config = Config::default();
        config.layout.node_radius = 12.0;
        config.data_dir = Some(PathBuf::from("/srv/trees"));
        config.tree_kind = TreeKind::RedBlack;
        config.export.max_pixels = 1_000;

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn tree_kind_is_kebab_case() {
        let config: Config = toml::from_str("tree_kind = \"red-black\"\n").unwrap();
        assert_eq!(config.tree_kind, TreeKind::RedBlack);
        assert_eq!(Config::default().tree_kind, TreeKind::Plain);
        assert_eq!(Config::default().export.max_pixels, 50_000_000);
    }

    #[test]
    fn missing_or_broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(Config::load_or_default(&path), Config::default());

        std::fs::write(&path, "[zoom\n").unwrap();
        assert_eq!(Config::load_or_default(&path), Config::default());

        std::fs::write(&path, "[layout]\nmargin = 5.0\n").unwrap();
        assert_eq!(Config::load_or_default(&path).layout.margin, 5.0);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "layout = 3").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::ParseError(_))));
    }
}
