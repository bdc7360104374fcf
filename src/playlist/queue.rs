//! The play queue
//!
//! The queue only records song URLs in play order. It is bounded; the default
//! bound matches the traditional `max_playlist_length` of 16384.

use super::{PlaylistError, SongSink};
use crate::catalog::Song;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Default maximum number of queued songs
pub const DEFAULT_MAX_LENGTH: usize = 16384;

/// Bounded, ordered queue of song URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayQueue {
    urls: Vec<String>,
    max_length: usize,
}

impl Default for PlayQueue {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}

impl PlayQueue {
    #[must_use]
    pub const fn new(max_length: usize) -> Self {
        Self {
            urls: Vec::new(),
            max_length,
        }
    }

    /// Load a queue saved with [`PlayQueue::save`]; a missing file is an empty queue
    ///
    /// # Errors
    ///
    /// Returns `PlaylistError::Io` if the file exists but cannot be read, or
    /// `PlaylistError::QueueFull` if it holds more entries than `max_length`.
    pub fn load(path: &Path, max_length: usize) -> Result<Self, PlaylistError> {
        let mut queue = Self::new(max_length);
        if !path.exists() {
            return Ok(queue);
        }

        let contents = fs::read_to_string(path)?;
        for url in contents.lines().filter(|line| !line.is_empty()) {
            queue.push_url(url.to_string())?;
        }
        Ok(queue)
    }

    /// Write one URL per line, replacing the file
    ///
    /// # Errors
    ///
    /// Returns `PlaylistError::Io` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), PlaylistError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = fs::File::create(path)?;
        for url in &self.urls {
            writeln!(file, "{url}")?;
        }
        Ok(())
    }

    fn push_url(&mut self, url: String) -> Result<(), PlaylistError> {
        if self.urls.len() >= self.max_length {
            return Err(PlaylistError::QueueFull(self.max_length));
        }
        self.urls.push(url);
        Ok(())
    }

    #[must_use]
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn clear(&mut self) {
        self.urls.clear();
    }
}

impl SongSink for PlayQueue {
    fn append(&mut self, song: &Song) -> Result<(), PlaylistError> {
        self.push_url(song.url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_append_keeps_order() {
        let mut queue = PlayQueue::default();
        queue.append(&Song::new("b.mp3", None)).unwrap();
        queue.append(&Song::new("a.mp3", None)).unwrap();

        assert_eq!(queue.urls(), ["b.mp3", "a.mp3"]);
        assert_eq!(queue.max_length(), DEFAULT_MAX_LENGTH);
    }

    #[test]
    fn test_queue_full() {
        let mut queue = PlayQueue::new(1);
        queue.append(&Song::new("a.mp3", None)).unwrap();

        let result = queue.append(&Song::new("b.mp3", None));
        assert!(matches!(result, Err(PlaylistError::QueueFull(1))));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state").join("queue");

        let mut queue = PlayQueue::new(10);
        queue.append(&Song::new("rock/a.mp3", None)).unwrap();
        queue.append(&Song::new("rock/b.mp3", None)).unwrap();
        queue.save(&path).unwrap();

        let loaded = PlayQueue::load(&path, 10).unwrap();
        assert_eq!(loaded, queue);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let queue = PlayQueue::load(&dir.path().join("nope"), 10).unwrap();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut queue = PlayQueue::new(2);
        queue.append(&Song::new("a.mp3", None)).unwrap();
        queue.clear();
        assert!(queue.is_empty());
    }
}
