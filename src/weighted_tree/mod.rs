//! Randomized binary search tree keyed by integer weights, where each node also maintains the size
//! of its subtree.

mod node;
pub mod tree;
mod weighted;

pub use self::node::Node;
pub use self::weighted::WeightedTree;
