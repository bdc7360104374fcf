//! Testing utilities for songdb
//!
//! Provides a `TestDb` wrapper for temporary song stores and a small sample
//! catalog shared by the operation tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Catalog, Song, Tag, TagType};
use crate::db::Database;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Song store living in its own temporary directory
///
/// The directory is removed when the wrapper goes out of scope, so parallel
/// tests never share state or leave artifacts behind.
pub struct TestDb {
    // Field order matters: the database must be dropped (and flushed)
    // before its directory goes away.
    db: Database,
    path: PathBuf,
    _dir: TempDir,
}

impl TestDb {
    /// Open an empty store in a fresh temporary directory
    ///
    /// # Panics
    /// Panics if the directory or database cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("songs.db");
        let db = Database::open(&path).expect("Failed to open test database");

        Self { db, path, _dir: dir }
    }

    /// Open a store pre-filled with [`sample_songs`]
    ///
    /// # Panics
    /// Panics if any song cannot be stored.
    #[must_use]
    pub fn with_sample() -> Self {
        let test_db = Self::new();
        for song in sample_songs() {
            test_db.db.insert_song(&song).expect("Failed to insert sample song");
        }
        test_db
    }

    /// Get a reference to the underlying database
    #[must_use]
    pub const fn db(&self) -> &Database {
        &self.db
    }

    /// Get the path to the test database
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for TestDb {
    fn default() -> Self {
        Self::new()
    }
}

/// Songs of the sample catalog, in URL order
///
/// ```text
/// jazz/c.mp3    Miles Davis, Kind of Blue, 545 s
/// rock/a.mp3    AC/DC, Highway to Hell, 180 s
/// rock/b.mp3    no tag
/// rock/live/d.mp3  AC/DC and Angus Young, no duration
/// top.mp3       Genre Pop only
/// ```
#[must_use]
pub fn sample_songs() -> Vec<Song> {
    vec![
        Song::new(
            "jazz/c.mp3",
            Some(
                Tag::new()
                    .with(TagType::Artist, "Miles Davis")
                    .with(TagType::Album, "Kind of Blue")
                    .with_duration(545),
            ),
        ),
        Song::new(
            "rock/a.mp3",
            Some(
                Tag::new()
                    .with(TagType::Artist, "AC/DC")
                    .with(TagType::Album, "Highway to Hell")
                    .with_duration(180),
            ),
        ),
        Song::new("rock/b.mp3", None),
        Song::new(
            "rock/live/d.mp3",
            Some(
                Tag::new()
                    .with(TagType::Artist, "AC/DC")
                    .with(TagType::Artist, "Angus Young"),
            ),
        ),
        Song::new("top.mp3", Some(Tag::new().with(TagType::Genre, "Pop"))),
    ]
}

/// Catalog built from [`sample_songs`]
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::from_songs(sample_songs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_basic() {
        let test_db = TestDb::new();
        assert_eq!(test_db.db().count(), 0);
        assert!(test_db.path().exists());
    }

    #[test]
    fn test_db_cleanup() {
        let path = {
            let test_db = TestDb::new();
            test_db.path().to_path_buf()
        };

        assert!(!path.exists());
    }

    #[test]
    fn test_db_with_sample() {
        let test_db = TestDb::with_sample();
        assert_eq!(test_db.db().count(), sample_songs().len());
    }

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = sample_catalog();

        assert_eq!(catalog.root().songs().len(), 1);
        assert!(catalog.lookup_directory("rock/live").is_some());
        assert_eq!(catalog.lookup_directory("rock").unwrap().songs().len(), 2);
    }
}
