// ABOUTME: Library side of the bst-visualizer binary.
// ABOUTME: Application state and command handlers, usable without a window.

pub mod state;

pub use state::{AppState, Properties, Status, StatusKind};
