//! Listing serializers
//!
//! These produce the line-oriented text returned to clients. Key spelling and
//! line order are part of the protocol:
//!
//! - song record: `file: <url>`, `Time: <seconds>` when known, then one
//!   `<Tag>: <value>` line per tag item in stored order
//! - directory: `directory: <path>`, never for the catalog root
//! - unique value: `<Tag>: <value>`, or `file: <url>`
//!
//! The `*_line` helpers at the bottom are for human-facing CLI summaries only.

use crate::catalog::{Directory, Song};
use crate::locate::LocateTag;
use crate::playlist::PlaylistInfo;
use colored::Colorize;
use std::io::{self, Write};

const SONG_FILE: &str = "file: ";
const SONG_TIME: &str = "Time: ";
const DIRECTORY: &str = "directory: ";

/// Write the `file:` line of a song
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_song_url<W: Write + ?Sized>(out: &mut W, song: &Song) -> io::Result<()> {
    writeln!(out, "{SONG_FILE}{}", song.url)
}

/// Write a full song record
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_song_info<W: Write + ?Sized>(out: &mut W, song: &Song) -> io::Result<()> {
    write_song_url(out, song)?;

    if let Some(tag) = &song.tag {
        if let Some(seconds) = tag.duration {
            writeln!(out, "{SONG_TIME}{seconds}")?;
        }
        for item in &tag.items {
            writeln!(out, "{}: {}", item.kind, item.value)?;
        }
    }
    Ok(())
}

/// Write the `directory:` line, skipping the path-less root
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_directory<W: Write + ?Sized>(out: &mut W, directory: &Directory) -> io::Result<()> {
    match directory.path() {
        Some(path) => writeln!(out, "{DIRECTORY}{path}"),
        None => Ok(()),
    }
}

/// Write one distinct value of an enumerate listing
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_tag_value<W: Write + ?Sized>(out: &mut W, tag: LocateTag, value: &str) -> io::Result<()> {
    writeln!(out, "{tag}: {value}")
}

/// Write one stored playlist entry
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_playlist_info<W: Write + ?Sized>(out: &mut W, info: &PlaylistInfo) -> io::Result<()> {
    writeln!(out, "playlist: {}", info.name)?;
    if let Some(mtime) = info.mtime {
        writeln!(out, "Last-Modified: {}", mtime.format("%Y-%m-%dT%H:%M:%SZ"))?;
    }
    Ok(())
}

/// Format a labelled number for display
#[must_use]
pub fn count_line(label: &str, value: u64, quiet: bool) -> String {
    if quiet {
        value.to_string()
    } else {
        format!("{}: {}", label.bold(), value)
    }
}

/// Format a duration in seconds as `h:mm:ss` for display
#[must_use]
pub fn duration_line(label: &str, seconds: u64, quiet: bool) -> String {
    if quiet {
        return seconds.to_string();
    }
    let (hours, rest) = (seconds / 3600, seconds % 3600);
    format!(
        "{}: {} ({}:{:02}:{:02})",
        label.bold(),
        seconds,
        hours,
        rest / 60,
        rest % 60
    )
}
