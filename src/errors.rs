//! Provides the error type for invalid traversal setups.
//!
//! Faults raised while a traversal runs are the caller's own error type and are yielded by
//! the iterators unchanged.

use thiserror::Error;

/// Raised synchronously by [crate::Traverse::build] before any root is pulled or any
/// node is expanded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraverseError {
    #[error("No root sequence set")]
    RootsNotSet,
    #[error("No expansion function set")]
    ExpandNotSet,
}
