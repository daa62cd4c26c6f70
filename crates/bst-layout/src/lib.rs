// ABOUTME: Tree layout for bst-visualizer.
// ABOUTME: Maps tree shape to 2D node positions and tracks the zoom factor.

mod tree;
mod zoom;

pub use tree::{layout, Edge, PlacedNode, TreeLayout};
pub use zoom::Zoom;
