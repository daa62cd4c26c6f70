// ABOUTME: Drawing of laid-out trees for bst-visualizer.
// ABOUTME: Backend-neutral canvas trait plus a software raster used for image export.

pub mod bdf;
mod canvas;
mod export;
mod font;
mod raster;

pub use bdf::{BdfError, BdfFont, BdfGlyph};
pub use canvas::{draw_tree, Canvas, NodeStyle, Point};
pub use export::{export_image, image_format_for, render_image, RenderError};
pub use font::label_font;
pub use raster::RasterCanvas;
