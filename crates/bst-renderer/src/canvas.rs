// ABOUTME: Backend-neutral drawing of a laid-out tree.
// ABOUTME: The window and the image exporter both implement Canvas.

use bst_core::{Color, Theme, TreeKind};
use bst_layout::TreeLayout;

/// A position on the scaled drawing surface, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    pub fill: Color,
    pub outline: Color,
    pub outline_width: f32,
    pub text: Color,
}

pub trait Canvas {
    fn fill_background(&mut self, color: Color);

    fn draw_edge(&mut self, from: Point, to: Point, width: f32, color: Color);

    /// Filled circle with an outline and a centered label
    fn draw_node(&mut self, center: Point, radius: f32, style: &NodeStyle, label: &str);
}

const EDGE_WIDTH: f32 = 1.5;
const OUTLINE_WIDTH: f32 = 1.5;
const HIGHLIGHT_WIDTH: f32 = 3.0;

/// Draw `layout` at `scale`, outlining the keys in `highlight`
pub fn draw_tree(
    canvas: &mut impl Canvas,
    layout: &TreeLayout,
    theme: &Theme,
    scale: f32,
    highlight: &[i32],
) {
    canvas.fill_background(theme.background);

    let nodes = layout.nodes();
    let at = |i: usize| Point {
        x: nodes[i].x * scale,
        y: nodes[i].y * scale,
    };

    // Edges first so node circles cover the line ends
    for edge in layout.edges() {
        canvas.draw_edge(at(edge.parent), at(edge.child), EDGE_WIDTH * scale, theme.edge());
    }

    let radius = layout.radius() * scale;
    let red_black = layout.kind() == TreeKind::RedBlack;
    for (i, node) in nodes.iter().enumerate() {
        let highlighted = highlight.contains(&node.key);
        let (fill, text) = if red_black {
            theme.red_black(node.red)
        } else {
            (theme.node, theme.text)
        };
        let style = NodeStyle {
            fill,
            outline: if highlighted {
                theme.highlight()
            } else {
                theme.edge()
            },
            outline_width: scale * if highlighted { HIGHLIGHT_WIDTH } else { OUTLINE_WIDTH },
            text,
        };
        canvas.draw_node(at(i), radius, &style, &node.key.to_string());
    }
}
