//! Playlist collaborators fed by catalog traversals
//!
//! - [`PlayQueue`]: the active playback queue
//! - [`StoredPlaylist`]: a named `.m3u` playlist on disk
//! - [`meta`]: the playlist metadata vector and its persisted text format
//!
//! Queue and stored playlists both implement [`SongSink`], which is all the
//! populate operation needs to know about them.

pub mod error;
pub mod meta;
pub mod queue;
pub mod stored;

pub use error::PlaylistError;
pub use meta::{PlaylistInfo, PlaylistVector};
pub use queue::PlayQueue;
pub use stored::StoredPlaylist;

use crate::catalog::Song;

/// Destination for songs visited by a populate traversal
pub trait SongSink {
    /// Append one song
    ///
    /// # Errors
    ///
    /// Returns `PlaylistError` if the destination cannot take the song.
    fn append(&mut self, song: &Song) -> Result<(), PlaylistError>;
}
