// ABOUTME: Binary search tree over unique integer keys, optionally self-balancing.
// ABOUTME: Insert, delete, search paths, traversals and cached node/leaf counts.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::balance;

pub(crate) type Link = Option<Box<Node>>;

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) key: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
    /// Nodes on the longest path down, kept by AVL trees only
    pub(crate) height: i32,
    /// Link color, kept by red-black trees only
    pub(crate) red: bool,
}

impl Node {
    pub(crate) fn leaf(key: i32) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 1,
            red: true,
        })
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Balancing scheme applied on insert and delete
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TreeKind {
    /// No rebalancing; the shape follows insertion order
    #[default]
    Plain,
    /// Height-balanced by rotations
    Avl,
    /// Left-leaning red-black tree
    RedBlack,
}

impl TreeKind {
    pub fn all() -> &'static [TreeKind] {
        &[TreeKind::Plain, TreeKind::Avl, TreeKind::RedBlack]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TreeKind::Plain => "Binary search tree",
            TreeKind::Avl => "AVL tree",
            TreeKind::RedBlack => "Red-black tree",
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TreeKind::Plain => "plain",
            TreeKind::Avl => "avl",
            TreeKind::RedBlack => "red-black",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tree kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for TreeKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "plain" | "bst" => Ok(TreeKind::Plain),
            "avl" => Ok(TreeKind::Avl),
            "redblack" | "rb" => Ok(TreeKind::RedBlack),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

/// Read-only handle to a node, used by layout and rendering code
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    node: &'a Node,
    kind: TreeKind,
}

impl<'a> NodeRef<'a> {
    fn new(node: &'a Node, kind: TreeKind) -> Self {
        Self { node, kind }
    }

    pub fn key(&self) -> i32 {
        self.node.key
    }

    pub fn left(&self) -> Option<NodeRef<'a>> {
        let kind = self.kind;
        self.node.left.as_deref().map(|n| NodeRef::new(n, kind))
    }

    pub fn right(&self) -> Option<NodeRef<'a>> {
        let kind = self.kind;
        self.node.right.as_deref().map(|n| NodeRef::new(n, kind))
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// Whether this is a red node of a red-black tree
    pub fn is_red(&self) -> bool {
        self.kind == TreeKind::RedBlack && self.node.red
    }
}

/// Depth-first traversal orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Left, node, right. Yields keys in ascending order.
    InOrder,
    /// Node, left, right. Replaying it by insertion rebuilds the same shape.
    PreOrder,
    /// Left, right, node
    PostOrder,
}

impl TraversalOrder {
    pub fn all() -> &'static [TraversalOrder] {
        &[
            TraversalOrder::InOrder,
            TraversalOrder::PreOrder,
            TraversalOrder::PostOrder,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TraversalOrder::InOrder => "Inorder Traversal",
            TraversalOrder::PreOrder => "Preorder Traversal",
            TraversalOrder::PostOrder => "Postorder Traversal",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TraversalOrder::InOrder => "in-order",
            TraversalOrder::PreOrder => "pre-order",
            TraversalOrder::PostOrder => "post-order",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown traversal order: {0}")]
pub struct UnknownOrder(pub String);

impl FromStr for TraversalOrder {
    type Err = UnknownOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "in" | "inorder" => Ok(TraversalOrder::InOrder),
            "pre" | "preorder" => Ok(TraversalOrder::PreOrder),
            "post" | "postorder" => Ok(TraversalOrder::PostOrder),
            _ => Err(UnknownOrder(s.to_string())),
        }
    }
}

/// Keys visited while descending towards a key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    pub target: i32,
    pub visited: Vec<i32>,
    pub found: bool,
}

/// Ordered binary tree of unique `i32` keys.
///
/// Node and leaf counts are cached and kept up to date by `insert` and
/// `delete`, so the count queries are O(1). Height is computed on demand.
#[derive(Debug, Default)]
pub struct BinarySearchTree {
    root: Link,
    node_count: usize,
    leaf_count: usize,
    kind: TreeKind,
}

impl BinarySearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(kind: TreeKind) -> Self {
        let mut tree = Self::default();
        tree.kind = kind;
        tree
    }

    pub fn kind(&self) -> TreeKind {
        self.kind
    }

    /// Same keys in a tree of `kind`, built by replaying the pre-order
    pub fn rebuild(&self, kind: TreeKind) -> Self {
        let mut tree = Self::with_kind(kind);
        tree.extend(self.traversal(TraversalOrder::PreOrder));
        tree
    }

    pub fn root(&self) -> Option<NodeRef<'_>> {
        let kind = self.kind;
        self.root.as_deref().map(|n| NodeRef::new(n, kind))
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.node_count
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn internal_count(&self) -> usize {
        self.node_count - self.leaf_count
    }

    /// Insert a key. Returns `false` and leaves the tree untouched if the key
    /// is already present.
    pub fn insert(&mut self, key: i32) -> bool {
        let inserted = match self.kind {
            TreeKind::Plain => return self.insert_unbalanced(key),
            TreeKind::Avl => !self.contains(key) && balance::avl_insert(&mut self.root, key),
            TreeKind::RedBlack => !self.contains(key) && balance::rb_insert(&mut self.root, key),
        };
        if inserted {
            self.node_count += 1;
            // Rotations move leaves around, so count them again
            self.leaf_count = self.recount_leaves();
        }
        inserted
    }

    fn insert_unbalanced(&mut self, key: i32) -> bool {
        let mut slot = &mut self.root;
        // Whether the node we end up attaching to had no children before
        let mut parent_was_leaf = false;

        while let Some(node) = slot {
            parent_was_leaf = node.is_leaf();
            slot = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *slot = Some(Node::leaf(key));

        self.node_count += 1;
        // A leaf parent trades its leaf status to the new node
        if !parent_was_leaf {
            self.leaf_count += 1;
        }
        true
    }

    /// Delete a key. Returns `false` if the key is not in the tree.
    ///
    /// A node with two children takes its in-order successor's key and the
    /// successor node is removed from the right subtree instead.
    pub fn delete(&mut self, key: i32) -> bool {
        let removed = match self.kind {
            TreeKind::Plain => delete_from(&mut self.root, key, &mut self.leaf_count),
            TreeKind::Avl => balance::avl_delete(&mut self.root, key),
            // The red-black descent reshapes the tree on the way down, so it
            // must only start when the key is there
            TreeKind::RedBlack => self.contains(key) && balance::rb_delete(&mut self.root, key),
        };
        if !removed {
            return false;
        }
        self.node_count -= 1;
        if self.kind != TreeKind::Plain {
            self.leaf_count = self.recount_leaves();
        }
        debug_assert_eq!(self.leaf_count, self.recount_leaves());
        true
    }

    /// Drop every node
    pub fn reset(&mut self) {
        // Iterative so long degenerate chains don't recurse in Drop
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.node_count = 0;
        self.leaf_count = 0;
    }

    pub fn contains(&self, key: i32) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Descend towards `key`, recording every key compared along the way
    pub fn search_path(&self, key: i32) -> SearchPath {
        let mut path = SearchPath {
            target: key,
            ..SearchPath::default()
        };
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            path.visited.push(node.key);
            cur = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => {
                    path.found = true;
                    break;
                }
            };
        }
        path
    }

    pub fn min(&self) -> Option<i32> {
        self.root.as_deref().map(leftmost)
    }

    pub fn max(&self) -> Option<i32> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(node.key)
    }

    /// Height in edges: -1 for an empty tree, 0 for a lone root
    pub fn height(&self) -> i32 {
        let mut queue: VecDeque<&Node> = self.root.as_deref().into_iter().collect();
        let mut height = -1;
        while !queue.is_empty() {
            height += 1;
            for _ in 0..queue.len() {
                if let Some(node) = queue.pop_front() {
                    queue.extend(node.left.as_deref());
                    queue.extend(node.right.as_deref());
                }
            }
        }
        height
    }

    pub fn traversal(&self, order: TraversalOrder) -> Vec<i32> {
        match order {
            TraversalOrder::InOrder => self.in_order(),
            TraversalOrder::PreOrder => self.pre_order(),
            TraversalOrder::PostOrder => self.post_order(),
        }
    }

    fn in_order(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.node_count);
        let mut stack: Vec<&Node> = Vec::new();
        let mut cur = self.root.as_deref();
        loop {
            while let Some(node) = cur {
                stack.push(node);
                cur = node.left.as_deref();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            out.push(node.key);
            cur = node.right.as_deref();
        }
        out
    }

    fn pre_order(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.node_count);
        let mut stack: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(node.key);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }

    fn post_order(&self) -> Vec<i32> {
        // Node, right, left reversed is left, right, node
        let mut out = Vec::with_capacity(self.node_count);
        let mut stack: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(node.key);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        out.reverse();
        out
    }

    fn recount_leaves(&self) -> usize {
        let mut stack: Vec<&Node> = self.root.as_deref().into_iter().collect();
        let mut leaves = 0;
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                leaves += 1;
            }
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        leaves
    }
}

pub(crate) fn leftmost(mut node: &Node) -> i32 {
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    node.key
}

/// Remove `key` from the subtree in `slot`, adjusting `leaves` as nodes gain
/// or lose leaf status. Returns whether a node was removed.
fn delete_from(slot: &mut Link, key: i32, leaves: &mut usize) -> bool {
    let Some(node) = slot.as_mut() else {
        return false;
    };

    match key.cmp(&node.key) {
        Ordering::Less | Ordering::Greater => {
            let child = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
            let removed = delete_from(child, key, leaves);
            // The child slot held the removed node, so this node just lost its last child
            if removed && node.is_leaf() {
                *leaves += 1;
            }
            removed
        }
        Ordering::Equal => {
            if node.left.is_some() {
                if let Some(successor) = node.right.as_deref().map(leftmost) {
                    node.key = successor;
                    // The left child stays, so this node's leaf status cannot change
                    delete_from(&mut node.right, successor, leaves);
                    return true;
                }
            }
            if node.is_leaf() {
                *leaves -= 1;
            }
            let child = node.left.take().or_else(|| node.right.take());
            *slot = child;
            true
        }
    }
}

impl Drop for BinarySearchTree {
    fn drop(&mut self) {
        self.reset();
    }
}

impl Extend<i32> for BinarySearchTree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl FromIterator<i32> for BinarySearchTree {
    fn from_iter<I: IntoIterator<Item = i32>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}
