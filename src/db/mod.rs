//! Persisted song store
//!
//! The store keeps one record per song in a sled tree and is the source from
//! which catalog snapshots are built. It plays the part of the update side:
//! the query layer never touches it directly, it only sees the [`Catalog`]
//! produced by [`Database::load_catalog`].
//!
//! Tree layout:
//! - `songs`: URL bytes -> bincode-encoded `Option<Tag>`

use crate::catalog::{Catalog, Song};
use sled::{Db, Tree};
use std::path::Path;

pub mod error;
pub mod types;

pub use error::DbError;
pub use types::{SongRecord, UrlKey};

/// Song store backed by sled
pub struct Database {
    db: Db,
    songs: Tree,
}

impl Database {
    /// Opens or creates a song store at the specified path
    ///
    /// # Examples
    /// ```no_run
    /// use songdb::db::Database;
    /// let db = Database::open("music_db").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the database or its song tree cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DbError> {
        let db = sled::open(path)?;
        let songs = db.open_tree("songs")?;
        Ok(Self { db, songs })
    }

    /// Insert or replace a song record
    ///
    /// Returns `true` if a record with the same URL was replaced.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the URL is invalid, encoding fails or the write fails.
    pub fn insert_song(&self, song: &Song) -> Result<bool, DbError> {
        let key = UrlKey::new(song.url.as_str())?;
        let value = SongRecord(song.tag.clone()).encode()?;
        let replaced = self.songs.insert(key.as_bytes(), value)?.is_some();
        tracing::debug!(url = %song.url, replaced, "stored song");
        Ok(replaced)
    }

    /// Get a single song by URL
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the URL is invalid or the record cannot be decoded.
    pub fn get_song(&self, url: &str) -> Result<Option<Song>, DbError> {
        let key = UrlKey::new(url)?;
        match self.songs.get(key.as_bytes())? {
            Some(value) => Ok(Some(SongRecord::decode(&value)?.into_song(key))),
            None => Ok(None),
        }
    }

    /// Remove a song; returns whether it existed
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the URL is invalid or the removal fails.
    pub fn remove_song(&self, url: &str) -> Result<bool, DbError> {
        let key = UrlKey::new(url)?;
        Ok(self.songs.remove(key.as_bytes())?.is_some())
    }

    /// Check whether a song is stored
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the URL is invalid or the lookup fails.
    pub fn contains(&self, url: &str) -> Result<bool, DbError> {
        let key = UrlKey::new(url)?;
        Ok(self.songs.contains_key(key.as_bytes())?)
    }

    /// All songs in URL byte order
    ///
    /// # Errors
    ///
    /// Returns `DbError` if iteration fails or a record cannot be decoded.
    pub fn list_songs(&self) -> Result<Vec<Song>, DbError> {
        let mut songs = Vec::with_capacity(self.songs.len());
        for result in &self.songs {
            let (key, value) = result?;
            let key = UrlKey::from_bytes(&key)?;
            songs.push(SongRecord::decode(&value)?.into_song(key));
        }
        Ok(songs)
    }

    /// Build a catalog snapshot from every stored song
    ///
    /// Directory and song order in the catalog follow URL byte order.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if reading the songs fails.
    pub fn load_catalog(&self) -> Result<Catalog, DbError> {
        let songs = self.list_songs()?;
        tracing::info!(songs = songs.len(), "loaded catalog");
        Ok(Catalog::from_songs(songs))
    }

    /// Number of stored songs
    #[must_use]
    pub fn count(&self) -> usize {
        self.songs.len()
    }

    /// Remove every song
    ///
    /// # Errors
    ///
    /// Returns `DbError` if clearing the tree fails.
    pub fn clear(&self) -> Result<(), DbError> {
        self.songs.clear()?;
        Ok(())
    }

    /// Flush all pending writes to disk
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the flush operation fails.
    pub fn flush(&self) -> Result<(), DbError> {
        self.db.flush()?;
        Ok(())
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        // Best-effort flush on drop. Errors are ignored since we can't
        // propagate them from Drop. Callers should explicitly flush()
        // if they need guaranteed durability.
        let _ = self.db.flush();
    }
}
