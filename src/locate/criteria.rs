//! Criterion sets built from raw request tokens

use super::{LocateError, LocateTag, resolve};

/// One matching condition: a tag (or pseudo-tag) and the text to look for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    pub tag: LocateTag,
    pub needle: String,
}

impl Criterion {
    #[must_use]
    pub fn new(tag: LocateTag, needle: impl Into<String>) -> Self {
        Self {
            tag,
            needle: needle.into(),
        }
    }
}

/// Ordered, AND-combined list of criteria
///
/// Order only decides which criterion rejects a song first; it never changes
/// which songs match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriterionSet {
    criteria: Vec<Criterion>,
}

impl CriterionSet {
    /// Build a set from flat `key value key value ...` tokens
    ///
    /// Needles are copied, so the set does not borrow from the request.
    /// Either the whole list is valid and a set is returned, or nothing built
    /// so far survives the error.
    ///
    /// # Errors
    ///
    /// - `LocateError::OddArgumentCount` if the tokens cannot form pairs
    /// - `LocateError::UnknownTagType` for the first key that does not resolve
    pub fn build<S: AsRef<str>>(tokens: &[S]) -> Result<Self, LocateError> {
        if tokens.len() % 2 != 0 {
            return Err(LocateError::OddArgumentCount(tokens.len()));
        }

        let mut criteria = Vec::with_capacity(tokens.len() / 2);
        for pair in tokens.chunks_exact(2) {
            let tag = resolve(pair[0].as_ref())?;
            criteria.push(Criterion::new(tag, pair[1].as_ref()));
        }

        Ok(Self { criteria })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Criterion> {
        self.criteria.iter()
    }
}

impl FromIterator<Criterion> for CriterionSet {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        Self {
            criteria: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CriterionSet {
    type Item = &'a Criterion;
    type IntoIter = std::slice::Iter<'a, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.criteria.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TagType;

    #[test]
    fn test_build_pairs_in_order() {
        let set = CriterionSet::build(&["artist", "AC/DC", "file", "rock/a.mp3"]).unwrap();

        assert_eq!(set.len(), 2);
        let criteria: Vec<_> = set.iter().cloned().collect();
        assert_eq!(
            criteria,
            vec![
                Criterion::new(LocateTag::Tag(TagType::Artist), "AC/DC"),
                Criterion::new(LocateTag::File, "rock/a.mp3"),
            ]
        );
    }

    #[test]
    fn test_build_empty_is_valid() {
        let tokens: [&str; 0] = [];
        let set = CriterionSet::build(&tokens).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_build_odd_count() {
        assert_eq!(
            CriterionSet::build(&["artist"]),
            Err(LocateError::OddArgumentCount(1))
        );
        assert_eq!(
            CriterionSet::build(&["artist", "x", "album"]),
            Err(LocateError::OddArgumentCount(3))
        );
    }

    #[test]
    fn test_build_reports_first_unknown_key() {
        let result = CriterionSet::build(&["artist", "X", "badkey", "Y", "worse", "Z"]);
        assert_eq!(result, Err(LocateError::UnknownTagType("badkey".to_string())));
    }

    #[test]
    fn test_odd_count_checked_before_keys() {
        let result = CriterionSet::build(&["badkey", "Y", "artist"]);
        assert_eq!(result, Err(LocateError::OddArgumentCount(3)));
    }

    #[test]
    fn test_needles_are_owned_copies() {
        let tokens = vec![String::from("album"), String::from("Back in Black")];
        let set = CriterionSet::build(&tokens).unwrap();
        drop(tokens);

        assert_eq!(set.iter().next().unwrap().needle, "Back in Black");
    }

    #[test]
    fn test_needles_kept_verbatim() {
        let set = CriterionSet::build(&["title", "  Mixed Case  "]).unwrap();
        assert_eq!(set.iter().next().unwrap().needle, "  Mixed Case  ");
    }
}
