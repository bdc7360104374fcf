//! Playlist metadata vector and its text format
//!
//! Each playlist is persisted as one section:
//!
//! ```text
//! playlist_begin: Favorites
//! mtime: 1000
//! playlist_end
//! ```
//!
//! The `mtime` line is optional and only written when a timestamp is known.

use super::PlaylistError;
use chrono::{DateTime, Utc};
use std::io::{self, BufRead, Write};

/// Marker line prefix opening a section; the playlist name follows it
pub const PLAYLIST_META_BEGIN: &str = "playlist_begin: ";
const PLAYLIST_END: &str = "playlist_end";
const MTIME_KEY: &str = "mtime";

/// Name and modification time of one stored playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistInfo {
    pub name: String,
    pub mtime: Option<DateTime<Utc>>,
}

impl PlaylistInfo {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mtime: None,
        }
    }

    #[must_use]
    pub const fn with_mtime(mut self, mtime: DateTime<Utc>) -> Self {
        self.mtime = Some(mtime);
        self
    }
}

/// Playlists keyed by name, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistVector {
    entries: Vec<PlaylistInfo>,
}

impl PlaylistVector {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Replace the entry with the same name, or append a new one
    ///
    /// Returns `true` if a new entry was appended.
    pub fn update_or_insert(&mut self, info: PlaylistInfo) -> bool {
        match self.entries.iter_mut().find(|entry| entry.name == info.name) {
            Some(existing) => {
                *existing = info;
                false
            }
            None => {
                self.entries.push(info);
                true
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PlaylistInfo> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn remove(&mut self, name: &str) -> Option<PlaylistInfo> {
        let index = self.entries.iter().position(|entry| entry.name == name)?;
        Some(self.entries.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlaylistInfo> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a PlaylistVector {
    type Item = &'a PlaylistInfo;
    type IntoIter = std::slice::Iter<'a, PlaylistInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Write one section per entry
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn save<W: Write>(out: &mut W, playlists: &PlaylistVector) -> io::Result<()> {
    for info in playlists {
        writeln!(out, "{PLAYLIST_META_BEGIN}{}", info.name)?;
        if let Some(mtime) = info.mtime {
            writeln!(out, "{MTIME_KEY}: {}", mtime.timestamp())?;
        }
        writeln!(out, "{PLAYLIST_END}")?;
    }
    Ok(())
}

/// Parse every section in `reader`
///
/// Sections naming an already loaded playlist update it in place.
///
/// # Errors
///
/// Returns `PlaylistError::MalformedRecord` with the raw line for any line that
/// is neither a section marker, a blank line between sections, nor a valid
/// `mtime` line inside a section. I/O failures are returned as
/// `PlaylistError::Io`.
pub fn load<R: BufRead>(reader: R) -> Result<PlaylistVector, PlaylistError> {
    let mut playlists = PlaylistVector::new();
    let mut lines = reader.lines();

    while let Some(line) = lines.next() {
        let line = line?;
        if let Some(name) = line.strip_prefix(PLAYLIST_META_BEGIN) {
            let info = load_section(&mut lines, name)?;
            playlists.update_or_insert(info);
        } else if !line.trim().is_empty() {
            return Err(PlaylistError::MalformedRecord(line));
        }
    }

    Ok(playlists)
}

/// Read the body of one section, up to and including `playlist_end`
///
/// End of input before the terminator closes the section.
fn load_section<I>(lines: &mut I, name: &str) -> Result<PlaylistInfo, PlaylistError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut info = PlaylistInfo::new(name);

    for line in lines.by_ref() {
        let line = line?;
        if line == PLAYLIST_END {
            break;
        }

        let Some(seconds) = parse_mtime(&line) else {
            return Err(PlaylistError::MalformedRecord(line));
        };
        // A negative stamp means "unknown" to older writers
        if seconds < 0 {
            info.mtime = None;
        } else {
            let Some(mtime) = DateTime::from_timestamp(seconds, 0) else {
                return Err(PlaylistError::MalformedRecord(line));
            };
            info.mtime = Some(mtime);
        }
    }

    Ok(info)
}

fn parse_mtime(line: &str) -> Option<i64> {
    let (key, value) = line.split_once(':')?;
    if key != MTIME_KEY {
        return None;
    }
    value.trim_start().parse().ok()
}
