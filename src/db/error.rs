//! Song store error types
//!
//! This module defines all error types that can occur while reading or writing
//! the persisted song records.
//!
//! # Error Types
//!
//! - **`SledError`**: Errors from the underlying sled embedded database
//! - **`DecodeError`**: Failures when deserializing a song record
//! - **`EncodeError`**: Failures when serializing a song record
//! - **`InvalidUrl`**: A song URL that cannot be stored in the catalog
//! - **`SerializeError`**: Stored keys that are not valid UTF-8

use thiserror::Error;

/// Song store errors
#[derive(Debug, Error)]
pub enum DbError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// Represents a bincode decoding error
    #[error("Error while decoding data: {0}")]
    DecodeError(#[from] bincode::error::DecodeError),

    /// Represents a bincode encoding error
    #[error("Error while encoding data: {0}")]
    EncodeError(#[from] bincode::error::EncodeError),

    /// Stored data that is not in the expected shape
    #[error("Error during serialization: {0}")]
    SerializeError(String),

    /// URL rejected before it reached the database
    #[error("Invalid song URL \"{0}\"")]
    InvalidUrl(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
