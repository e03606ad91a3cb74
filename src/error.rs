use std::collections::TryReserveError;

use thiserror::Error;

/// Errors returned by the fallible insert operations of [`RbTree`](crate::RbTree).
///
/// The tree is left unmodified whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The node arena could not grow.
    #[error("failed to allocate a tree node: {0}")]
    AllocationFailed(#[from] TryReserveError),
    /// The index type cannot address another node.
    #[error("reached maximum number of nodes")]
    IndexExhausted,
    /// An equal key is already stored.
    #[error("key already present in the tree")]
    DuplicateKey,
}
