//! Keys and values of the song tree
//!
//! - **`UrlKey`**: a validated song URL; its UTF-8 bytes are the sled key, so
//!   iteration order is byte order of the URLs
//! - **`SongRecord`**: the encoded value, i.e. the song's optional tag
//!
//! # Examples
//!
//! ```
//! use songdb::db::types::UrlKey;
//!
//! let key = UrlKey::new("rock/a.mp3").unwrap();
//! assert_eq!(&*key, "rock/a.mp3");
//! assert!(UrlKey::new("/etc/passwd").is_err());
//! ```

use super::error::DbError;
use crate::catalog::{Song, Tag};

/// A song URL that is safe to store and to place in the catalog tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlKey(String);

impl UrlKey {
    /// # Errors
    ///
    /// Returns `DbError::InvalidUrl` for empty or absolute URLs, URLs with
    /// empty, `.` or `..` components, and URLs containing line breaks.
    pub fn new(url: impl Into<String>) -> Result<Self, DbError> {
        let url = url.into();
        let valid = !url.is_empty()
            && !url.contains(['\n', '\r'])
            && url
                .split('/')
                .all(|part| !part.is_empty() && part != "." && part != "..");

        if valid {
            Ok(Self(url))
        } else {
            Err(DbError::InvalidUrl(url))
        }
    }

    /// # Errors
    ///
    /// Returns `DbError::SerializeError` if the stored key is not valid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DbError> {
        std::str::from_utf8(bytes)
            .map(|url| Self(url.to_string()))
            .map_err(|e| DbError::SerializeError(format!("Invalid UTF-8 in song key: {e}")))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::ops::Deref for UrlKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for UrlKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Encoded value stored under a [`UrlKey`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRecord(pub Option<Tag>);

impl SongRecord {
    /// # Errors
    ///
    /// Returns `DbError::EncodeError` if the tag cannot be serialized.
    pub fn encode(&self) -> Result<Vec<u8>, DbError> {
        Ok(bincode::encode_to_vec(&self.0, bincode::config::standard())?)
    }

    /// # Errors
    ///
    /// Returns `DbError::DecodeError` if the bytes are not an encoded tag.
    pub fn decode(bytes: &[u8]) -> Result<Self, DbError> {
        let (tag, _): (Option<Tag>, usize) =
            bincode::decode_from_slice(bytes, bincode::config::standard())?;
        Ok(Self(tag))
    }

    #[must_use]
    pub fn into_song(self, key: UrlKey) -> Song {
        Song::new(key.into_string(), self.0)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
