// ABOUTME: Rebalancing insert and delete for AVL and left-leaning red-black trees.
// ABOUTME: Operates on the owned node links of BinarySearchTree.

use std::cmp::Ordering;

use crate::tree::{leftmost, Link, Node};

fn height(link: &Link) -> i32 {
    link.as_ref().map_or(0, |n| n.height)
}

fn update_height(node: &mut Node) {
    node.height = 1 + height(&node.left).max(height(&node.right));
}

fn balance_factor(node: &Node) -> i32 {
    height(&node.left) - height(&node.right)
}

fn avl_rotate_right(mut node: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    update_height(&mut node);
    pivot.right = Some(node);
    update_height(&mut pivot);
    pivot
}

fn avl_rotate_left(mut node: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    update_height(&mut node);
    pivot.left = Some(node);
    update_height(&mut pivot);
    pivot
}

/// Restore `|balance| <= 1` at `node`, assuming its subtrees are balanced
fn avl_rebalance(mut node: Box<Node>) -> Box<Node> {
    update_height(&mut node);
    let factor = balance_factor(&node);
    if factor > 1 {
        if node.left.as_deref().is_some_and(|l| balance_factor(l) < 0) {
            node.left = node.left.take().map(avl_rotate_left);
        }
        return avl_rotate_right(node);
    }
    if factor < -1 {
        if node.right.as_deref().is_some_and(|r| balance_factor(r) > 0) {
            node.right = node.right.take().map(avl_rotate_right);
        }
        return avl_rotate_left(node);
    }
    node
}

pub(crate) fn avl_insert(slot: &mut Link, key: i32) -> bool {
    let Some(mut node) = slot.take() else {
        *slot = Some(Node::leaf(key));
        return true;
    };
    let inserted = match key.cmp(&node.key) {
        Ordering::Less => avl_insert(&mut node.left, key),
        Ordering::Greater => avl_insert(&mut node.right, key),
        Ordering::Equal => false,
    };
    *slot = Some(if inserted { avl_rebalance(node) } else { node });
    inserted
}

pub(crate) fn avl_delete(slot: &mut Link, key: i32) -> bool {
    let Some(mut node) = slot.take() else {
        return false;
    };
    let removed = match key.cmp(&node.key) {
        Ordering::Less => avl_delete(&mut node.left, key),
        Ordering::Greater => avl_delete(&mut node.right, key),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => return true,
            (Some(child), None) | (None, Some(child)) => {
                *slot = Some(child);
                return true;
            }
            (Some(left), Some(right)) => {
                let successor = leftmost(&right);
                node.key = successor;
                node.left = Some(left);
                node.right = Some(right);
                avl_delete(&mut node.right, successor)
            }
        },
    };
    *slot = Some(if removed { avl_rebalance(node) } else { node });
    removed
}

fn is_red(link: &Link) -> bool {
    link.as_ref().is_some_and(|n| n.red)
}

fn left_left_red(node: &Node) -> bool {
    node.left.as_ref().is_some_and(|l| is_red(&l.left))
}

fn right_left_red(node: &Node) -> bool {
    node.right.as_ref().is_some_and(|r| is_red(&r.left))
}

fn rb_rotate_left(mut node: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    pivot.red = node.red;
    node.red = true;
    pivot.left = Some(node);
    pivot
}

fn rb_rotate_right(mut node: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    pivot.red = node.red;
    node.red = true;
    pivot.right = Some(node);
    pivot
}

fn flip_colors(node: &mut Node) {
    node.red = !node.red;
    for child in [node.left.as_mut(), node.right.as_mut()].into_iter().flatten() {
        child.red = !child.red;
    }
}

/// Lean red links left, split 4-nodes
fn rb_fix_up(mut node: Box<Node>) -> Box<Node> {
    if is_red(&node.right) && !is_red(&node.left) {
        node = rb_rotate_left(node);
    }
    if is_red(&node.left) && left_left_red(&node) {
        node = rb_rotate_right(node);
    }
    if is_red(&node.left) && is_red(&node.right) {
        flip_colors(&mut node);
    }
    node
}

fn rb_insert_at(slot: &mut Link, key: i32) -> bool {
    let Some(mut node) = slot.take() else {
        *slot = Some(Node::leaf(key));
        return true;
    };
    let inserted = match key.cmp(&node.key) {
        Ordering::Less => rb_insert_at(&mut node.left, key),
        Ordering::Greater => rb_insert_at(&mut node.right, key),
        Ordering::Equal => false,
    };
    *slot = Some(rb_fix_up(node));
    inserted
}

pub(crate) fn rb_insert(root: &mut Link, key: i32) -> bool {
    let inserted = rb_insert_at(root, key);
    if let Some(root) = root.as_mut() {
        root.red = false;
    }
    inserted
}

/// Make the left child or one of its children red before descending left
fn move_red_left(mut node: Box<Node>) -> Box<Node> {
    flip_colors(&mut node);
    if right_left_red(&node) {
        node.right = node.right.take().map(rb_rotate_right);
        node = rb_rotate_left(node);
        flip_colors(&mut node);
    }
    node
}

/// Make the right child or one of its children red before descending right
fn move_red_right(mut node: Box<Node>) -> Box<Node> {
    flip_colors(&mut node);
    if left_left_red(&node) {
        node = rb_rotate_right(node);
        flip_colors(&mut node);
    }
    node
}

fn rb_delete_min(mut node: Box<Node>) -> Link {
    if node.left.is_none() {
        return node.right.take();
    }
    if !is_red(&node.left) && !left_left_red(&node) {
        node = move_red_left(node);
    }
    node.left = node.left.take().and_then(rb_delete_min);
    Some(rb_fix_up(node))
}

/// Remove `key`, which must be in the subtree
fn rb_delete_at(mut node: Box<Node>, key: i32) -> Link {
    if key < node.key {
        if !is_red(&node.left) && !left_left_red(&node) {
            node = move_red_left(node);
        }
        node.left = node.left.take().and_then(|l| rb_delete_at(l, key));
    } else {
        if is_red(&node.left) {
            node = rb_rotate_right(node);
        }
        if key == node.key && node.right.is_none() {
            return node.left.take();
        }
        if !is_red(&node.right) && !right_left_red(&node) {
            node = move_red_right(node);
        }
        if key == node.key {
            if let Some(right) = node.right.take() {
                node.key = leftmost(&right);
                node.right = rb_delete_min(right);
            }
        } else {
            node.right = node.right.take().and_then(|r| rb_delete_at(r, key));
        }
    }
    Some(rb_fix_up(node))
}

/// Remove `key` from a red-black tree that is known to contain it
pub(crate) fn rb_delete(root: &mut Link, key: i32) -> bool {
    let Some(mut node) = root.take() else {
        return false;
    };
    if !is_red(&node.left) && !is_red(&node.right) {
        node.red = true;
    }
    *root = rb_delete_at(node, key);
    if let Some(root) = root.as_mut() {
        root.red = false;
    }
    true
}
