//! Song matchers
//!
//! Two disciplines share one type dispatch:
//!
//! - **exact**: the needle must equal the URL or a tag value byte for byte
//! - **substring**: the case-folded needle must occur inside the case-folded
//!   URL or tag value
//!
//! For `file` and `any` the URL is tried first; `file` stops there. Otherwise
//! the tag items of the criterion's type (all items for `any`) are tried, and
//! a single hit is enough. A song without a tag can only match through its URL.

use super::{Criterion, CriterionSet, LocateTag};
use crate::catalog::Song;

/// Fold text for case-insensitive comparison
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Run `test` over the texts `tag` selects on `song`, URL first when allowed
fn dispatch(song: &Song, tag: LocateTag, mut test: impl FnMut(&str) -> bool) -> bool {
    if matches!(tag, LocateTag::File | LocateTag::Any) {
        if test(&song.url) {
            return true;
        }
        if tag == LocateTag::File {
            return false;
        }
    }

    let Some(song_tag) = &song.tag else {
        return false;
    };

    song_tag
        .items
        .iter()
        .filter(|item| match tag {
            LocateTag::Tag(kind) => item.kind == kind,
            LocateTag::Any | LocateTag::File => true,
        })
        .any(|item| test(&item.value))
}

/// Exact-equality test of one criterion against a song
#[must_use]
pub fn exact_match(song: &Song, tag: LocateTag, needle: &str) -> bool {
    dispatch(song, tag, |value| value == needle)
}

/// Case-insensitive substring test of one criterion against a song
///
/// `folded_needle` must already have gone through [`fold_case`].
#[must_use]
pub fn substring_match(song: &Song, tag: LocateTag, folded_needle: &str) -> bool {
    dispatch(song, tag, |value| fold_case(value).contains(folded_needle))
}

/// A predicate deciding whether a song satisfies a whole criterion set
pub trait SongMatcher {
    fn matches(&self, song: &Song) -> bool;
}

/// Every criterion must be matched exactly
#[derive(Debug, Clone, Copy)]
pub struct ExactMatcher<'a> {
    criteria: &'a CriterionSet,
}

impl<'a> ExactMatcher<'a> {
    #[must_use]
    pub const fn new(criteria: &'a CriterionSet) -> Self {
        Self { criteria }
    }
}

impl SongMatcher for ExactMatcher<'_> {
    fn matches(&self, song: &Song) -> bool {
        self.criteria
            .iter()
            .all(|criterion| exact_match(song, criterion.tag, &criterion.needle))
    }
}

/// Every criterion must occur as a case-insensitive substring
///
/// Needles are folded once at construction rather than once per song.
#[derive(Debug, Clone)]
pub struct SubstringMatcher {
    folded: Vec<Criterion>,
}

impl SubstringMatcher {
    #[must_use]
    pub fn new(criteria: &CriterionSet) -> Self {
        Self {
            folded: criteria
                .iter()
                .map(|criterion| Criterion::new(criterion.tag, fold_case(&criterion.needle)))
                .collect(),
        }
    }
}

impl SongMatcher for SubstringMatcher {
    fn matches(&self, song: &Song) -> bool {
        self.folded
            .iter()
            .all(|criterion| substring_match(song, criterion.tag, &criterion.needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Tag, TagType};

    fn acdc() -> Song {
        Song::new(
            "rock/a.mp3",
            Some(
                Tag::new()
                    .with(TagType::Artist, "AC/DC")
                    .with(TagType::Album, "Back in Black")
                    .with(TagType::Artist, "Bon Scott")
                    .with_duration(180),
            ),
        )
    }

    fn untagged() -> Song {
        Song::new("rock/b.mp3", None)
    }

    #[test]
    fn test_exact_tag_match() {
        let song = acdc();
        assert!(exact_match(&song, LocateTag::Tag(TagType::Artist), "AC/DC"));
        assert!(exact_match(&song, LocateTag::Tag(TagType::Artist), "Bon Scott"));
        assert!(!exact_match(&song, LocateTag::Tag(TagType::Artist), "ac/dc"));
        assert!(!exact_match(&song, LocateTag::Tag(TagType::Artist), "AC"));
        assert!(!exact_match(&song, LocateTag::Tag(TagType::Album), "AC/DC"));
    }

    #[test]
    fn test_exact_file_match_only_checks_url() {
        let song = acdc();
        assert!(exact_match(&song, LocateTag::File, "rock/a.mp3"));
        assert!(!exact_match(&song, LocateTag::File, "AC/DC"));
    }

    #[test]
    fn test_exact_any_checks_url_then_items() {
        let song = acdc();
        assert!(exact_match(&song, LocateTag::Any, "rock/a.mp3"));
        assert!(exact_match(&song, LocateTag::Any, "Back in Black"));
        assert!(!exact_match(&song, LocateTag::Any, "Back"));
    }

    #[test]
    fn test_substring_match_folds_case() {
        let song = acdc();
        let needle = fold_case("ac");
        assert!(substring_match(&song, LocateTag::Tag(TagType::Artist), &needle));
        assert!(substring_match(&song, LocateTag::Any, &fold_case("BLACK")));
        assert!(substring_match(&song, LocateTag::File, &fold_case("ROCK/")));
        assert!(!substring_match(&song, LocateTag::Tag(TagType::Title), &needle));
    }

    #[test]
    fn test_untagged_song_matches_only_through_url() {
        let song = untagged();
        assert!(!exact_match(&song, LocateTag::Tag(TagType::Artist), "AC/DC"));
        assert!(exact_match(&song, LocateTag::Any, "rock/b.mp3"));
        assert!(!exact_match(&song, LocateTag::Any, "AC/DC"));
        assert!(substring_match(&song, LocateTag::Any, "b.mp3"));
    }

    #[test]
    fn test_set_matchers_are_conjunctive() {
        let set = CriterionSet::build(&["artist", "AC/DC", "album", "Back in Black"]).unwrap();
        assert!(ExactMatcher::new(&set).matches(&acdc()));

        let set = CriterionSet::build(&["artist", "AC/DC", "album", "Highway"]).unwrap();
        assert!(!ExactMatcher::new(&set).matches(&acdc()));

        let set = CriterionSet::build(&["artist", "dc", "album", "BACK"]).unwrap();
        assert!(SubstringMatcher::new(&set).matches(&acdc()));
        assert!(!ExactMatcher::new(&set).matches(&acdc()));
    }

    #[test]
    fn test_empty_set_matches_everything() {
        let set = CriterionSet::default();
        assert!(ExactMatcher::new(&set).matches(&untagged()));
        assert!(SubstringMatcher::new(&set).matches(&untagged()));
    }

    #[test]
    fn test_substring_matcher_leaves_set_untouched() {
        let set = CriterionSet::build(&["artist", "AC"]).unwrap();
        let _ = SubstringMatcher::new(&set);
        assert_eq!(set.iter().next().unwrap().needle, "AC");
    }
}
