//! Recursive operations on subtrees represented as `Option<Box<Node>>`.
//!
//! Insertions take the slot holding a subtree root and leave the new root in it. Rotations take
//! ownership of a node and return the new root, which the caller reattaches.

use crate::error::{Result, TreeError};
use crate::weighted_tree::node::Node;
use log::{debug, trace};
use rand::Rng;
use std::cmp::{self, Ordering};

pub type Tree = Option<Box<Node>>;

pub fn size(tree: &Tree) -> usize {
    match tree {
        Some(ref node) => node.size,
        None => 0,
    }
}

pub fn fix_size(tree: &mut Tree) -> Result<()> {
    match tree {
        Some(ref mut node) => {
            node.update();
            Ok(())
        },
        None => Err(TreeError::EmptySubtree { operation: "fix_size" }),
    }
}

// A node without a right child is returned unchanged.
pub fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => {
            debug!("Skipping left rotation around {}: no right child.", node.weight);
            return node;
        },
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

// A node without a left child is returned unchanged.
pub fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => {
            debug!("Skipping right rotation around {}: no left child.", node.weight);
            return node;
        },
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

pub fn insert(tree: &mut Tree, weight: i32) {
    match tree {
        Some(ref mut node) => {
            if node.weight > weight {
                insert(&mut node.left, weight);
            } else {
                insert(&mut node.right, weight);
            }
            node.update();
        },
        None => *tree = Some(Box::new(Node::new(weight))),
    }
}

pub fn insert_root(tree: &mut Tree, weight: i32) {
    let new_root = match tree.take() {
        Some(mut node) => {
            if weight < node.weight {
                insert_root(&mut node.left, weight);
                rotate_right(node)
            } else {
                insert_root(&mut node.right, weight);
                rotate_left(node)
            }
        },
        None => Box::new(Node::new(weight)),
    };
    *tree = Some(new_root);
}

pub fn random_insert<R: Rng>(tree: &mut Tree, weight: i32, rng: &mut R) {
    let should_promote = match tree {
        Some(ref node) => rng.gen_range(0, node.size + 1) == 0,
        None => {
            *tree = Some(Box::new(Node::new(weight)));
            return;
        },
    };

    if should_promote {
        trace!("Promoting {} to the root of a subtree of size {}.", weight, size(tree));
        insert_root(tree, weight);
        return;
    }

    if let Some(ref mut node) = tree {
        if node.weight > weight {
            random_insert(&mut node.left, weight, rng);
        } else {
            random_insert(&mut node.right, weight, rng);
        }
        node.update();
    }
}

pub fn find(tree: &Tree, weight: i32) -> Option<&Node> {
    tree.as_ref().and_then(|node| match node.weight.cmp(&weight) {
        Ordering::Equal => Some(&**node),
        Ordering::Greater => find(&node.left, weight),
        Ordering::Less => find(&node.right, weight),
    })
}

pub fn total_weight(tree: &Tree) -> i64 {
    match tree {
        Some(ref node) => {
            i64::from(node.weight) + total_weight(&node.left) + total_weight(&node.right)
        },
        None => 0,
    }
}

// Only the two immediate children are compared. Ties go to the right child.
pub fn largest_child_subtree(tree: &Tree) -> Option<&Node> {
    tree.as_ref().and_then(|node| {
        if total_weight(&node.left) > total_weight(&node.right) {
            node.left()
        } else {
            node.right()
        }
    })
}

pub fn height(tree: &Tree) -> usize {
    match tree {
        Some(ref node) => cmp::max(height(&node.left), height(&node.right)) + 1,
        None => 0,
    }
}
