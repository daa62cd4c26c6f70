// ABOUTME: Software canvas that draws into an RGB image buffer.
// ABOUTME: Thick lines, outlined discs and bitmap-font labels, no anti-aliasing.

use bst_core::Color;
use image::{Rgb, RgbImage};

use crate::bdf::{BdfError, BdfFont};
use crate::canvas::{Canvas, NodeStyle, Point};
use crate::font::label_font;

pub struct RasterCanvas {
    image: RgbImage,
    font: BdfFont,
}

fn rgb(color: Color) -> Rgb<u8> {
    Rgb(color.to_array())
}

impl RasterCanvas {
    /// Canvas of at least 1x1 pixels
    pub fn new(width: u32, height: u32) -> Result<Self, BdfError> {
        Ok(Self {
            image: RgbImage::new(width.max(1), height.max(1)),
            font: label_font()?,
        })
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, color);
    }

    /// Filled square of side `size` centered on `(x, y)`
    fn stamp(&mut self, x: i64, y: i64, size: i64, color: Rgb<u8>) {
        let half = size / 2;
        for dy in -half..=(size - 1 - half) {
            for dx in -half..=(size - 1 - half) {
                self.put(x + dx, y + dy, color);
            }
        }
    }

    fn draw_label(&mut self, center: Point, radius: f32, label: &str, color: Rgb<u8>) {
        let text_width = self.font.text_width(label);
        let cell_height = self.font.cell_height();
        if text_width == 0 || cell_height == 0 {
            return;
        }

        // Largest integer scale that keeps the label inside the circle, at least 1
        let fit_h = (radius * 0.9 / cell_height as f32).floor();
        let fit_w = (radius * 1.7 / text_width as f32).floor();
        let scale = fit_h.min(fit_w).max(1.0) as i64;

        let left = (center.x - (text_width as i64 * scale) as f32 / 2.0).round() as i64;
        let top = (center.y - (cell_height as i64 * scale) as f32 / 2.0).round() as i64;
        let baseline = top + self.font.ascent as i64 * scale;

        let mut pen_x = left;
        for c in label.chars() {
            let Some(glyph) = self.font.get_char(c).cloned() else {
                continue;
            };
            let glyph_top = baseline - (glyph.offset_y + glyph.height as i32) as i64 * scale;
            let glyph_left = pen_x + glyph.offset_x as i64 * scale;
            for row in 0..glyph.height {
                for col in 0..glyph.width {
                    if !glyph.pixel(col, row) {
                        continue;
                    }
                    for sy in 0..scale {
                        for sx in 0..scale {
                            self.put(
                                glyph_left + col as i64 * scale + sx,
                                glyph_top + row as i64 * scale + sy,
                                color,
                            );
                        }
                    }
                }
            }
            pen_x += glyph.dwidth_x as i64 * scale;
        }
    }
}

impl Canvas for RasterCanvas {
    fn fill_background(&mut self, color: Color) {
        let color = rgb(color);
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    fn draw_edge(&mut self, from: Point, to: Point, width: f32, color: Color) {
        let color = rgb(color);
        let size = width.round().max(1.0) as i64;
        let (mut x0, mut y0) = (from.x.round() as i64, from.y.round() as i64);
        let (x1, y1) = (to.x.round() as i64, to.y.round() as i64);

        // Bresenham
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.stamp(x0, y0, size, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn draw_node(&mut self, center: Point, radius: f32, style: &NodeStyle, label: &str) {
        let fill = rgb(style.fill);
        let outline = rgb(style.outline);
        let inner = (radius - style.outline_width).max(0.0);
        let (r2, inner2) = (radius * radius, inner * inner);

        let x_min = (center.x - radius).floor() as i64;
        let x_max = (center.x + radius).ceil() as i64;
        let y_min = (center.y - radius).floor() as i64;
        let y_max = (center.y + radius).ceil() as i64;
        for y in y_min..=y_max {
            for x in x_min..=x_max {
                // Sample at the pixel center
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                let d2 = dx * dx + dy * dy;
                if d2 <= inner2 {
                    self.put(x, y, fill);
                } else if d2 <= r2 {
                    self.put(x, y, outline);
                }
            }
        }

        self.draw_label(center, radius, label, rgb(style.text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> NodeStyle {
        NodeStyle {
            fill: Color::rgb(0, 0, 255),
            outline: Color::rgb(255, 0, 0),
            outline_width: 2.0,
            text: Color::WHITE,
        }
    }

    #[test]
    fn background_fills_every_pixel() {
        let mut canvas = RasterCanvas::new(8, 4).unwrap();
        canvas.fill_background(Color::rgb(1, 2, 3));
        assert!(canvas.image().pixels().all(|p| p.0 == [1, 2, 3]));
    }

    #[test]
    fn zero_size_canvas_is_clamped() {
        let canvas = RasterCanvas::new(0, 0).unwrap();
        assert_eq!(canvas.image().dimensions(), (1, 1));
    }

    #[test]
    fn edge_covers_both_endpoints() {
        let mut canvas = RasterCanvas::new(20, 20).unwrap();
        canvas.fill_background(Color::WHITE);
        canvas.draw_edge(
            Point { x: 2.0, y: 3.0 },
            Point { x: 15.0, y: 17.0 },
            1.0,
            Color::BLACK,
        );
        assert_eq!(canvas.image().get_pixel(2, 3).0, [0, 0, 0]);
        assert_eq!(canvas.image().get_pixel(15, 17).0, [0, 0, 0]);
        assert_eq!(canvas.image().get_pixel(15, 3).0, [255, 255, 255]);
    }

    #[test]
    fn node_has_outline_fill_and_label() {
        let mut canvas = RasterCanvas::new(60, 60).unwrap();
        canvas.fill_background(Color::WHITE);
        canvas.draw_node(Point { x: 30.0, y: 30.0 }, 20.0, &style(), "8");

        let img = canvas.image();
        // Just inside the rim is outline, well outside is background
        assert_eq!(img.get_pixel(30, 11).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(30, 5).0, [255, 255, 255]);
        // Between rim and label is fill
        assert_eq!(img.get_pixel(30, 16).0, [0, 0, 255]);
        // Some label pixels are drawn in the text color
        let white_inside = (20..40)
            .flat_map(|y| (20..40).map(move |x| (x, y)))
            .filter(|&(x, y)| img.get_pixel(x, y).0 == [255, 255, 255])
            .count();
        assert!(white_inside > 0);
    }

    #[test]
    fn drawing_off_canvas_is_clipped() {
        let mut canvas = RasterCanvas::new(10, 10).unwrap();
        canvas.draw_node(Point { x: -5.0, y: -5.0 }, 8.0, &style(), "-1");
        canvas.draw_edge(
            Point { x: -50.0, y: 5.0 },
            Point { x: 50.0, y: 5.0 },
            3.0,
            Color::WHITE,
        );
        assert_eq!(canvas.image().get_pixel(5, 5).0, [255, 255, 255]);
    }
}
