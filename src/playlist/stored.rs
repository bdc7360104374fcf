//! Stored playlists: `<playlist dir>/<name>.m3u`, one URL per line
//!
//! A [`StoredPlaylist`] collects URLs in memory and only touches the file in
//! [`StoredPlaylist::finish`]. A handle dropped without finishing, e.g. after a
//! failed traversal, leaves the directory exactly as it was.

use super::{PlaylistError, SongSink};
use crate::catalog::Song;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const PLAYLIST_SUFFIX: &str = "m3u";

/// Check that `name` can be used as a stored playlist file name
///
/// # Errors
///
/// Returns `PlaylistError::InvalidName` for empty names and names containing
/// `/` or a line break.
pub fn validate_name(name: &str) -> Result<(), PlaylistError> {
    if name.is_empty() || name.contains(['/', '\n', '\r']) {
        return Err(PlaylistError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// File of playlist `name` inside `dir`
#[must_use]
pub fn playlist_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{PLAYLIST_SUFFIX}"))
}

/// Delete the file of playlist `name`; returns whether it existed
///
/// # Errors
///
/// Returns `PlaylistError::InvalidName` if the name is unusable, or
/// `PlaylistError::Io` if the file exists but cannot be removed.
pub fn delete(dir: &Path, name: &str) -> Result<bool, PlaylistError> {
    validate_name(name)?;
    match fs::remove_file(playlist_path(dir, name)) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Pending append to a stored playlist file
#[derive(Debug)]
pub struct StoredPlaylist {
    name: String,
    path: PathBuf,
    pending: String,
    appended: usize,
}

impl StoredPlaylist {
    /// Prepare appending to playlist `name` inside `dir`
    ///
    /// Nothing is created on disk until [`StoredPlaylist::finish`].
    ///
    /// # Errors
    ///
    /// Returns `PlaylistError::InvalidName` if the name is unusable.
    pub fn open(dir: &Path, name: &str) -> Result<Self, PlaylistError> {
        validate_name(name)?;

        Ok(Self {
            name: name.to_string(),
            path: playlist_path(dir, name),
            pending: String::new(),
            appended: 0,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of songs appended through this handle
    #[must_use]
    pub const fn appended(&self) -> usize {
        self.appended
    }

    /// Write the collected lines, creating the directory and file as needed
    ///
    /// Returns the number of songs written.
    ///
    /// # Errors
    ///
    /// Returns `PlaylistError::Io` if the directory or file cannot be written.
    pub fn finish(self) -> Result<usize, PlaylistError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(self.pending.as_bytes())?;
        file.flush()?;
        tracing::debug!(playlist = %self.name, path = %self.path.display(), songs = self.appended, "wrote stored playlist");

        Ok(self.appended)
    }
}

impl SongSink for StoredPlaylist {
    fn append(&mut self, song: &Song) -> Result<(), PlaylistError> {
        self.pending.push_str(&song.url);
        self.pending.push('\n');
        self.appended += 1;
        Ok(())
    }
}
