// ABOUTME: Renders a layout into an image and saves it to disk.
// ABOUTME: The output format follows the file extension.

use std::path::Path;

use bst_core::Theme;
use bst_layout::TreeLayout;
use image::{ImageFormat, RgbImage};

use crate::bdf::BdfError;
use crate::canvas::draw_tree;
use crate::raster::RasterCanvas;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Unsupported image format: {0:?}")]
    UnsupportedFormat(String),

    #[error("Failed to load label font: {0}")]
    Font(#[from] BdfError),

    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Image would be {width}x{height} pixels, over the export limit")]
    TooLarge { width: u64, height: u64 },
}

/// Image format for `path`'s extension, if it is one we can write
pub fn image_format_for(path: &Path) -> Result<ImageFormat, RenderError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ImageFormat::from_extension(&ext) {
        Some(format @ (ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Bmp)) => Ok(format),
        _ => Err(RenderError::UnsupportedFormat(ext)),
    }
}

/// Pixel size of the surface at `scale`, refused when it exceeds `max_pixels`
fn checked_size(
    layout: &TreeLayout,
    scale: f32,
    max_pixels: u64,
) -> Result<(u32, u32), RenderError> {
    let (width, height) = layout.size();
    let width = (f64::from(width) * f64::from(scale)).ceil();
    let height = (f64::from(height) * f64::from(scale)).ceil();
    let too_large = || RenderError::TooLarge {
        width: width.clamp(0.0, u64::MAX as f64) as u64,
        height: height.clamp(0.0, u64::MAX as f64) as u64,
    };
    if !(width.is_finite() && height.is_finite()) || width * height > max_pixels as f64 {
        return Err(too_large());
    }
    match (u32::try_from(width as u64), u32::try_from(height as u64)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(too_large()),
    }
}

/// Rasterize the whole drawing surface at `scale`
pub fn render_image(
    layout: &TreeLayout,
    theme: &Theme,
    scale: f32,
    highlight: &[i32],
    max_pixels: u64,
) -> Result<RgbImage, RenderError> {
    let (width, height) = checked_size(layout, scale, max_pixels)?;
    let mut canvas = RasterCanvas::new(width, height)?;
    draw_tree(&mut canvas, layout, theme, scale, highlight);
    Ok(canvas.into_image())
}

pub fn export_image(
    layout: &TreeLayout,
    theme: &Theme,
    scale: f32,
    highlight: &[i32],
    max_pixels: u64,
    path: &Path,
) -> Result<(), RenderError> {
    let format = image_format_for(path)?;
    let image = render_image(layout, theme, scale, highlight, max_pixels)?;
    image.save_with_format(path, format)?;
    tracing::info!(
        "Exported {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}
