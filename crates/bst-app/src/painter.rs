// ABOUTME: Canvas implementation on top of an egui painter.
// ABOUTME: Lets the window draw the tree through the same code path as image export.

use bst_core::Color;
use bst_renderer::{Canvas, NodeStyle, Point};
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke};

pub fn color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// Font size that keeps `label` inside a node of `radius`
fn label_size(radius: f32, label: &str) -> f32 {
    let chars = label.chars().count().max(1) as f32;
    (radius * 0.8).min(radius * 3.2 / chars)
}

/// Draws into `rect`, with surface coordinates relative to its top-left corner
pub struct EguiCanvas<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn at(&self, point: Point) -> Pos2 {
        self.rect.min + egui::vec2(point.x, point.y)
    }
}

impl Canvas for EguiCanvas<'_> {
    fn fill_background(&mut self, color: Color) {
        self.painter.rect_filled(self.rect, 0.0, color32(color));
    }

    fn draw_edge(&mut self, from: Point, to: Point, width: f32, color: Color) {
        self.painter.line_segment(
            [self.at(from), self.at(to)],
            Stroke::new(width, color32(color)),
        );
    }

    fn draw_node(&mut self, center: Point, radius: f32, style: &NodeStyle, label: &str) {
        let center = self.at(center);
        // egui centers the stroke on the circle's edge
        self.painter.circle(
            center,
            (radius - style.outline_width / 2.0).max(0.0),
            color32(style.fill),
            Stroke::new(style.outline_width, color32(style.outline)),
        );
        self.painter.text(
            center,
            Align2::CENTER_CENTER,
            label,
            FontId::monospace(label_size(radius, label)),
            color32(style.text),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_colors() {
        assert_eq!(
            color32(Color::rgb(0x87, 0xce, 0xfa)),
            Color32::from_rgb(0x87, 0xce, 0xfa)
        );
    }

    #[test]
    fn long_labels_get_smaller() {
        assert_eq!(label_size(20.0, "7"), 16.0);
        assert!(label_size(20.0, "-2147483648") < label_size(20.0, "123"));
    }

    #[test]
    fn offsets_points_by_the_surface_origin() {
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(Pos2::new(10.0, 30.0), egui::vec2(100.0, 100.0));
        let painter = Painter::new(ctx, egui::LayerId::background(), rect);
        let canvas = EguiCanvas::new(&painter, rect);
        assert_eq!(canvas.at(Point { x: 5.0, y: 7.0 }), Pos2::new(15.0, 37.0));
    }
}
