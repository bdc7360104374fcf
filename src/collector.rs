//! Distinct-value collection for faceted listings
//!
//! A [`DistinctValues`] is created by one enumerate request, fed during its
//! traversal and drained once afterwards. Values come out in first-seen order.

use crate::catalog::Song;
use crate::locate::LocateTag;
use std::collections::HashSet;

/// Deduplicating collector for the values of one tag type
#[derive(Debug, Clone)]
pub struct DistinctValues {
    tag: LocateTag,
    seen: HashSet<String>,
    order: Vec<String>,
}

impl DistinctValues {
    #[must_use]
    pub fn new(tag: LocateTag) -> Self {
        Self {
            tag,
            seen: HashSet::new(),
            order: Vec::new(),
        }
    }

    /// Record one value; returns `true` the first time it is seen
    pub fn insert(&mut self, value: &str) -> bool {
        if self.seen.contains(value) {
            return false;
        }
        self.seen.insert(value.to_string());
        self.order.push(value.to_string());
        true
    }

    /// Record the values `song` holds for the collected type
    ///
    /// `File` records the URL, a tag type records every item of that type, and
    /// `Any` records nothing.
    pub fn visit(&mut self, song: &Song) {
        match self.tag {
            LocateTag::File => {
                self.insert(&song.url);
            }
            LocateTag::Tag(kind) => {
                if let Some(tag) = &song.tag {
                    for value in tag.values(kind) {
                        self.insert(value);
                    }
                }
            }
            LocateTag::Any => {}
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consume the collector, yielding values in first-seen order
    #[must_use]
    pub fn drain(self) -> Vec<String> {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Tag, TagType};

    fn song(url: &str, artists: &[&str]) -> Song {
        let tag = artists
            .iter()
            .fold(Tag::new(), |tag, artist| tag.with(TagType::Artist, *artist));
        Song::new(url, Some(tag))
    }

    #[test]
    fn test_first_seen_order_without_duplicates() {
        let mut values = DistinctValues::new(LocateTag::Tag(TagType::Artist));
        values.visit(&song("1.mp3", &["Beta", "Alpha"]));
        values.visit(&song("2.mp3", &["Alpha", "Gamma"]));
        values.visit(&song("3.mp3", &["Beta"]));

        assert_eq!(values.len(), 3);
        assert_eq!(values.drain(), vec!["Beta", "Alpha", "Gamma"]);
    }

    #[test]
    fn test_song_without_type_contributes_nothing() {
        let mut values = DistinctValues::new(LocateTag::Tag(TagType::Genre));
        values.visit(&song("1.mp3", &["Alpha"]));
        values.visit(&Song::new("2.mp3", None));

        assert!(values.is_empty());
    }

    #[test]
    fn test_file_collects_urls() {
        let mut values = DistinctValues::new(LocateTag::File);
        values.visit(&Song::new("a.mp3", None));
        values.visit(&song("b.mp3", &["X"]));

        assert_eq!(values.drain(), vec!["a.mp3", "b.mp3"]);
    }

    #[test]
    fn test_any_collects_nothing() {
        let mut values = DistinctValues::new(LocateTag::Any);
        values.visit(&song("a.mp3", &["X"]));

        assert!(values.drain().is_empty());
    }

    #[test]
    fn test_insert_reports_novelty() {
        let mut values = DistinctValues::new(LocateTag::File);
        assert!(values.insert("x"));
        assert!(!values.insert("x"));
    }
}
