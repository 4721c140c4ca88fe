use std::result;
use thiserror::Error;

/// Errors raised by operations whose preconditions were not met.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum TreeError {
    /// The operation requires a present subtree, but the subtree was empty.
    #[error("`{operation}` requires a non-empty subtree")]
    EmptySubtree { operation: &'static str },
}

pub type Result<T> = result::Result<T, TreeError>;
