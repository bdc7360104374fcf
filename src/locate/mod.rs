//! Locate criteria: key resolution, criterion sets and matchers
//!
//! A locate request arrives as a flat list of `key value` tokens, e.g.
//! `artist "AC/DC" album live`. Keys resolve to a [`LocateTag`], which is
//! either a real [`TagType`] or one of two pseudo-types:
//!
//! - **`file`** (legacy alias `filename`): matches against the song URL only
//! - **`any`**: matches against the URL and every tag item
//!
//! [`CriterionSet::build`] validates the whole token list up front, and the
//! matchers in [`matcher`] evaluate a set against one song at a time.
//!
//! # Examples
//!
//! ```
//! use songdb::locate::{CriterionSet, ExactMatcher, SongMatcher};
//! use songdb::catalog::{Song, Tag, TagType};
//!
//! let criteria = CriterionSet::build(&["artist", "AC/DC"]).unwrap();
//! let song = Song::new("rock/a.mp3", Some(Tag::new().with(TagType::Artist, "AC/DC")));
//! assert!(ExactMatcher::new(&criteria).matches(&song));
//! ```

pub mod criteria;
pub mod error;
pub mod matcher;

pub use criteria::{Criterion, CriterionSet};
pub use error::LocateError;
pub use matcher::{ExactMatcher, SongMatcher, SubstringMatcher, exact_match, substring_match};

use crate::catalog::TagType;
use std::fmt;
use std::str::FromStr;

const FILE_KEY: &str = "file";
const FILE_KEY_OLD: &str = "filename";
const ANY_KEY: &str = "any";

/// What a criterion is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocateTag {
    /// The song URL
    File,
    /// The URL, then every tag item regardless of type
    Any,
    /// Items of one tag type
    Tag(TagType),
}

impl LocateTag {
    /// The underlying tag type, `None` for the pseudo-types
    #[must_use]
    pub const fn tag_type(self) -> Option<TagType> {
        match self {
            Self::Tag(kind) => Some(kind),
            Self::File | Self::Any => None,
        }
    }
}

/// Resolve a criterion key, case-insensitively
///
/// Pseudo-keys are checked before tag type names.
///
/// # Errors
///
/// Returns `LocateError::UnknownTagType` carrying the key verbatim when it
/// names nothing.
pub fn resolve(key: &str) -> Result<LocateTag, LocateError> {
    if key.eq_ignore_ascii_case(FILE_KEY) || key.eq_ignore_ascii_case(FILE_KEY_OLD) {
        return Ok(LocateTag::File);
    }

    if key.eq_ignore_ascii_case(ANY_KEY) {
        return Ok(LocateTag::Any);
    }

    TagType::from_name(key)
        .map(LocateTag::Tag)
        .ok_or_else(|| LocateError::UnknownTagType(key.to_string()))
}

impl FromStr for LocateTag {
    type Err = LocateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s)
    }
}

impl fmt::Display for LocateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str(FILE_KEY),
            Self::Any => f.write_str(ANY_KEY),
            Self::Tag(kind) => write!(f, "{kind}"),
        }
    }
}

impl From<TagType> for LocateTag {
    fn from(kind: TagType) -> Self {
        Self::Tag(kind)
    }
}
