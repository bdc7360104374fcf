//! Song metadata: tag types, tag items and the per-song tag record
//!
//! A [`Tag`] is an ordered list of [`TagItem`]s plus an optional duration.
//! A song may carry several items of the same type (e.g. multiple artists),
//! and item order is preserved everywhere the tag is printed.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Known metadata tag types, in listing order
#[derive(Encode, Decode, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagType {
    Artist,
    Album,
    Title,
    Track,
    Name,
    Genre,
    Date,
    Composer,
    Performer,
    Comment,
    Disc,
}

impl TagType {
    /// Every tag type, in the order used by name resolution
    pub const ALL: [Self; 11] = [
        Self::Artist,
        Self::Album,
        Self::Title,
        Self::Track,
        Self::Name,
        Self::Genre,
        Self::Date,
        Self::Composer,
        Self::Performer,
        Self::Comment,
        Self::Disc,
    ];

    /// The key spelling used in listings (`Artist: ...`)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Artist => "Artist",
            Self::Album => "Album",
            Self::Title => "Title",
            Self::Track => "Track",
            Self::Name => "Name",
            Self::Genre => "Genre",
            Self::Date => "Date",
            Self::Composer => "Composer",
            Self::Performer => "Performer",
            Self::Comment => "Comment",
            Self::Disc => "Disc",
        }
    }

    /// Case-insensitive lookup by name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single (type, value) metadata entry
#[derive(Encode, Decode, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TagItem {
    pub kind: TagType,
    pub value: String,
}

impl TagItem {
    #[must_use]
    pub fn new(kind: TagType, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Metadata record attached to a song
#[derive(Encode, Decode, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    pub items: Vec<TagItem>,
    /// Duration in whole seconds, `None` when unknown
    pub duration: Option<u32>,
}

impl Tag {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            duration: None,
        }
    }

    /// Builder-style helper appending one item
    #[must_use]
    pub fn with(mut self, kind: TagType, value: impl Into<String>) -> Self {
        self.items.push(TagItem::new(kind, value));
        self
    }

    /// Builder-style helper setting the duration
    #[must_use]
    pub const fn with_duration(mut self, seconds: u32) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Values of every item of the given type, in stored order
    pub fn values(&self, kind: TagType) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .filter(move |item| item.kind == kind)
            .map(|item| item.value.as_str())
    }
}
