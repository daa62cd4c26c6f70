// ABOUTME: Places BST nodes on a 2D surface.
// ABOUTME: x follows in-order rank, y follows depth, both in unscaled units.

use bst_core::{BinarySearchTree, LayoutSettings, NodeRef, TreeKind};

/// A node with its position on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedNode {
    pub key: i32,
    /// Index in the in-order traversal
    pub rank: usize,
    pub depth: usize,
    pub x: f32,
    pub y: f32,
    /// Red node of a red-black tree
    pub red: bool,
}

/// Parent/child link, as indices into [`TreeLayout::nodes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub parent: usize,
    pub child: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayout {
    /// Nodes in in-order, so `nodes[i].rank == i`
    nodes: Vec<PlacedNode>,
    edges: Vec<Edge>,
    radius: f32,
    margin: f32,
    kind: TreeKind,
}

/// Lay out `tree` with the given spacing.
///
/// Sibling subtrees occupy disjoint rank intervals, so they never overlap
/// horizontally, and every parent sits between its left and right subtrees.
pub fn layout(tree: &BinarySearchTree, settings: &LayoutSettings) -> TreeLayout {
    let origin = settings.margin + settings.node_radius;
    let mut nodes = Vec::with_capacity(tree.node_count());

    let mut stack: Vec<(NodeRef<'_>, usize)> = Vec::new();
    let mut cur = tree.root().map(|root| (root, 0));
    loop {
        while let Some((node, depth)) = cur {
            stack.push((node, depth));
            cur = node.left().map(|left| (left, depth + 1));
        }
        let Some((node, depth)) = stack.pop() else {
            break;
        };
        let rank = nodes.len();
        nodes.push(PlacedNode {
            key: node.key(),
            rank,
            depth,
            x: origin + rank as f32 * settings.horizontal_spacing,
            y: origin + depth as f32 * settings.vertical_spacing,
            red: node.is_red(),
        });
        cur = node.right().map(|right| (right, depth + 1));
    }

    // In-order keys are sorted, so a key's index is found by binary search
    let index_of = |key: i32| nodes.binary_search_by_key(&key, |n| n.key).ok();
    let mut edges = Vec::with_capacity(nodes.len().saturating_sub(1));
    let mut pending: Vec<NodeRef<'_>> = tree.root().into_iter().collect();
    while let Some(node) = pending.pop() {
        for child in [node.left(), node.right()].into_iter().flatten() {
            if let (Some(parent), Some(child_idx)) = (index_of(node.key()), index_of(child.key())) {
                edges.push(Edge {
                    parent,
                    child: child_idx,
                });
            }
            pending.push(child);
        }
    }

    TreeLayout {
        nodes,
        edges,
        radius: settings.node_radius,
        margin: settings.margin,
        kind: tree.kind(),
    }
}

impl TreeLayout {
    pub fn nodes(&self) -> &[PlacedNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn kind(&self) -> TreeKind {
        self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Largest node-center coordinates, `(0, 0)` when empty
    pub fn extent(&self) -> (f32, f32) {
        self.nodes
            .iter()
            .fold((0.0f32, 0.0f32), |(mx, my), n| (mx.max(n.x), my.max(n.y)))
    }

    /// Unscaled surface size needed to show every node with its margin
    pub fn size(&self) -> (f32, f32) {
        if self.nodes.is_empty() {
            return (2.0 * self.margin, 2.0 * self.margin);
        }
        let (max_x, max_y) = self.extent();
        let pad = self.radius + self.margin;
        (max_x + pad, max_y + pad)
    }

    pub fn position_of(&self, key: i32) -> Option<&PlacedNode> {
        self.nodes
            .binary_search_by_key(&key, |n| n.key)
            .ok()
            .map(|i| &self.nodes[i])
    }

    /// Node whose circle contains the unscaled point `(x, y)`
    pub fn node_at(&self, x: f32, y: f32) -> Option<&PlacedNode> {
        let r2 = self.radius * self.radius;
        self.nodes.iter().find(|n| {
            let (dx, dy) = (n.x - x, n.y - y);
            dx * dx + dy * dy <= r2
        })
    }
}
