//! Error types for playlist collaborators
//!
//! Covers the playlist metadata text format, the play queue and stored
//! playlist files.

use std::io;
use thiserror::Error;

/// Errors raised by playlist metadata, the queue and stored playlists
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// A line in persisted playlist metadata that is not understood
    #[error("unknown line in playlist metadata: {0}")]
    MalformedRecord(String),

    /// The play queue already holds its configured maximum
    #[error("play queue is full ({0} songs)")]
    QueueFull(usize),

    /// Stored playlist name that cannot be used as a file name
    #[error("invalid playlist name \"{0}\"")]
    InvalidName(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
