//! Traversal errors
//!
//! A traversal fails when its root does not exist, when it is cancelled, or
//! when a visitor cannot do its job (a full queue, an unwritable playlist or
//! output stream). Visitor failures stop the walk at the offending node.

use crate::playlist::PlaylistError;
use std::io;
use thiserror::Error;

/// Errors that end a catalog traversal
#[derive(Debug, Error)]
pub enum TraverseError {
    /// The requested root path names no directory
    #[error("directory not found: {0}")]
    DirectoryNotFound(String),

    /// The request was cancelled between directories
    #[error("traversal cancelled")]
    Cancelled,

    /// A song sink refused a song
    #[error("playlist error: {0}")]
    Sink(#[from] PlaylistError),

    /// Writing the listing failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
