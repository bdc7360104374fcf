//! Criterion parsing errors
//!
//! These are the failures that can occur before any traversal starts: a key
//! that names no tag type, or a token list that cannot be split into pairs.

use thiserror::Error;

/// Errors raised while resolving keys and building criterion sets
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocateError {
    /// Key does not name a tag type or pseudo-type
    #[error("unsupported tag type \"{0}\"")]
    UnknownTagType(String),

    /// Criterion tokens must come in key/value pairs
    #[error("expected key/value pairs, got {0} argument(s)")]
    OddArgumentCount(usize),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
