// ABOUTME: Core types for bst-visualizer.
// ABOUTME: Tree engine, colors, theme settings, save files and app config.

mod balance;
pub mod color;
pub mod config;
pub mod storage;
pub mod theme;
pub mod tree;

pub use color::{Color, ColorParseError};
pub use config::{
    Config, ConfigError, ExportSettings, LayoutSettings, WindowSettings, ZoomSettings,
};
pub use storage::{DataDir, StorageError};
pub use theme::{ColorRole, SettingsReport, Theme};
pub use tree::{BinarySearchTree, NodeRef, SearchPath, TraversalOrder, TreeKind};
