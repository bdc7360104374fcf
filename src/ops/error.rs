//! Operation-level errors
//!
//! An operation fails either while parsing its criteria (before any lock is
//! taken) or during its single traversal. Both kinds pass through unchanged.

use crate::locate::LocateError;
use crate::traverse::TraverseError;
use thiserror::Error;

/// Errors returned by [`Session`](super::Session) operations
#[derive(Debug, Error)]
pub enum QueryError {
    /// Criterion tokens or tag type could not be parsed
    #[error(transparent)]
    Locate(#[from] LocateError),

    /// The traversal failed
    #[error(transparent)]
    Traverse(#[from] TraverseError),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
