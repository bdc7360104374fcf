//! songdb - A music catalog with tag-based queries
//!
//! This library keeps a directory tree of songs and answers the queries a
//! music player daemon serves from it: exact and substring search, counting,
//! play time, distinct tag values and bulk population of the play queue or a
//! stored playlist. Songs are persisted in an embedded database and loaded into
//! a shared in-memory catalog that many readers traverse concurrently.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod collector;
pub mod config;
pub mod db;
pub mod locate;
pub mod ops;
pub mod output;
pub mod playlist;
pub mod traverse;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum SongdbError {
    /// Database error
    #[error("Database error: {0}")]
    DbError(#[from] db::DbError),
    /// Query error
    #[error("Query error: {0}")]
    QueryError(#[from] ops::QueryError),
    /// Malformed criteria outside a query
    #[error("Query error: {0}")]
    LocateError(#[from] locate::LocateError),
    /// Traversal error outside a query
    #[error("Traversal error: {0}")]
    TraverseError(#[from] traverse::TraverseError),
    /// Playlist or queue error
    #[error("Playlist error: {0}")]
    PlaylistError(#[from] playlist::PlaylistError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
