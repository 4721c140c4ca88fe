use crate::weighted_tree::tree;

/// A struct representing an internal node of a weighted tree.
///
/// The weight of a node never changes after construction. Only the size and the children change
/// as the tree is restructured around it.
#[derive(Debug)]
pub struct Node {
    pub(crate) weight: i32,
    pub(crate) size: usize,
    pub(crate) left: tree::Tree,
    pub(crate) right: tree::Tree,
}

impl Node {
    pub fn new(weight: i32) -> Self {
        Node {
            weight,
            size: 1,
            left: None,
            right: None,
        }
    }

    /// Returns the weight of the node.
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Returns the number of nodes in the subtree rooted at this node, including itself.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_ref().map(|node| &**node)
    }

    /// Returns the root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_ref().map(|node| &**node)
    }

    pub fn update(&mut self) {
        let Node {
            ref mut size,
            ref left,
            ref right,
            ..
        } = self;
        *size = 1 + tree::size(left) + tree::size(right);
    }
}
