//! A size-augmented randomized binary search tree keyed by integer weights.

mod error;
pub mod weighted_tree;

pub use crate::error::{Result, TreeError};
