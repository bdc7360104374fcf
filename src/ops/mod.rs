//! Catalog operations
//!
//! A [`Session`] is the per-client worker context. Each operation:
//!
//! 1. parses its criterion tokens (failing before any lock is taken),
//! 2. takes the catalog read lock,
//! 3. performs exactly one traversal with an operation-specific visitor,
//! 4. releases the lock and returns.
//!
//! Listing output goes to any [`std::io::Write`]; sinks for populate requests
//! implement [`SongSink`].
//!
//! # Examples
//!
//! ```
//! use songdb::catalog::{Catalog, SharedCatalog, Song, Tag, TagType};
//! use songdb::ops::Session;
//!
//! let catalog = Catalog::from_songs([
//!     Song::new("rock/a.mp3", Some(Tag::new().with(TagType::Artist, "AC/DC").with_duration(180))),
//!     Song::new("rock/b.mp3", None),
//! ]);
//! let session = Session::new(SharedCatalog::new(catalog));
//!
//! assert_eq!(session.count(Some("rock")).unwrap(), 2);
//! assert_eq!(session.sum_duration(Some("rock")).unwrap(), 180);
//!
//! let mut out = Vec::new();
//! session.search(Some("rock"), &["artist", "ac"], &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "file: rock/a.mp3\nTime: 180\nArtist: AC/DC\n");
//! ```

pub mod error;
pub mod visitors;

pub use error::QueryError;

use crate::catalog::SharedCatalog;
use crate::collector::DistinctValues;
use crate::locate::{CriterionSet, ExactMatcher, LocateTag, SongMatcher, SubstringMatcher, resolve};
use crate::output;
use crate::playlist::SongSink;
use crate::traverse::{Cancellation, TraverseError, Visitor, walk};
use std::io::Write;
use visitors::{CollectUnique, DurationSum, Populate, PrintListing, PrintMatching, SongCount};

type Result<T> = std::result::Result<T, QueryError>;

/// Per-client context for running catalog operations
#[derive(Debug, Clone)]
pub struct Session {
    catalog: SharedCatalog,
    cancel: Cancellation,
}

impl Session {
    #[must_use]
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            catalog,
            cancel: Cancellation::new(),
        }
    }

    /// Flag used to cancel this session's running traversal
    #[must_use]
    pub const fn cancellation(&self) -> &Cancellation {
        &self.cancel
    }

    /// Run one traversal under the read lock
    fn run<V: Visitor + ?Sized>(
        &self,
        root: Option<&str>,
        visitor: &mut V,
    ) -> std::result::Result<(), TraverseError> {
        let catalog = self.catalog.read();
        walk(&catalog, root, visitor, &self.cancel)
    }

    /// Print every song under `root` that contains each needle, case-insensitively
    ///
    /// Returns the number of songs printed.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Locate` for malformed criteria and
    /// `QueryError::Traverse` if the root is missing or the walk fails.
    pub fn search<S: AsRef<str>, W: Write + ?Sized>(
        &self,
        root: Option<&str>,
        tokens: &[S],
        out: &mut W,
    ) -> Result<usize> {
        let criteria = CriterionSet::build(tokens)?;
        let matched = self.print_matching(root, SubstringMatcher::new(&criteria), out)?;
        tracing::debug!(root, criteria = criteria.len(), matched, "search");
        Ok(matched)
    }

    /// Print every song under `root` that equals each needle exactly
    ///
    /// Returns the number of songs printed.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Locate` for malformed criteria and
    /// `QueryError::Traverse` if the root is missing or the walk fails.
    pub fn find<S: AsRef<str>, W: Write + ?Sized>(
        &self,
        root: Option<&str>,
        tokens: &[S],
        out: &mut W,
    ) -> Result<usize> {
        let criteria = CriterionSet::build(tokens)?;
        let matched = self.print_matching(root, ExactMatcher::new(&criteria), out)?;
        tracing::debug!(root, criteria = criteria.len(), matched, "find");
        Ok(matched)
    }

    fn print_matching<M: SongMatcher, W: Write + ?Sized>(
        &self,
        root: Option<&str>,
        matcher: M,
        out: &mut W,
    ) -> Result<usize> {
        let mut visitor = PrintMatching::new(matcher, out);
        self.run(root, &mut visitor)?;
        Ok(visitor.matched)
    }

    /// Number of songs under `root`
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Traverse` if the root is missing or the walk is cancelled.
    pub fn count(&self, root: Option<&str>) -> Result<u64> {
        let mut visitor = SongCount::default();
        self.run(root, &mut visitor)?;
        Ok(visitor.0)
    }

    /// Total known duration in seconds of the songs under `root`
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Traverse` if the root is missing or the walk is cancelled.
    pub fn sum_duration(&self, root: Option<&str>) -> Result<u64> {
        let mut visitor = DurationSum::default();
        self.run(root, &mut visitor)?;
        Ok(visitor.0)
    }

    /// Print the distinct values of `tag_key` over songs matching `tokens` exactly
    ///
    /// Covers the whole catalog. Values are printed in first-seen order.
    /// Returns the number of values printed.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Locate` if the key or criteria are malformed and
    /// `QueryError::Traverse` if the walk fails.
    pub fn list_unique<S: AsRef<str>, W: Write + ?Sized>(
        &self,
        tag_key: &str,
        tokens: &[S],
        out: &mut W,
    ) -> Result<usize> {
        let tag = resolve(tag_key)?;
        let criteria = CriterionSet::build(tokens)?;
        self.list_unique_by(tag, &criteria, out)
    }

    /// [`Session::list_unique`] with an already resolved tag and criteria
    ///
    /// `Any` is accepted but collects nothing, so it prints nothing.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Traverse` if the walk fails or output cannot be written.
    pub fn list_unique_by<W: Write + ?Sized>(
        &self,
        tag: LocateTag,
        criteria: &CriterionSet,
        out: &mut W,
    ) -> Result<usize> {
        if tag == LocateTag::Any {
            tracing::debug!("unique listing of `any` collects no values");
        }

        let mut visitor = CollectUnique::new(ExactMatcher::new(criteria), DistinctValues::new(tag));
        self.run(None, &mut visitor)?;

        let values = visitor.values.drain();
        for value in &values {
            output::write_tag_value(out, tag, value).map_err(TraverseError::from)?;
        }
        tracing::debug!(%tag, criteria = criteria.len(), values = values.len(), "list unique");
        Ok(values.len())
    }

    /// Append every song under `root` to `sink`, in traversal order
    ///
    /// Returns the number of songs appended. On error, songs appended before
    /// the failure stay in the sink.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Traverse` if the root is missing, the walk is
    /// cancelled or the sink refuses a song.
    pub fn add_all<S: SongSink + ?Sized>(&self, root: Option<&str>, sink: &mut S) -> Result<usize> {
        let mut visitor = Populate::new(sink);
        self.run(root, &mut visitor)?;
        tracing::debug!(root, added = visitor.added, "add all");
        Ok(visitor.added)
    }

    /// Print every directory and song URL under `root`
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Traverse` if the root is missing or the walk fails.
    pub fn print_all<W: Write + ?Sized>(&self, root: Option<&str>, out: &mut W) -> Result<()> {
        self.run(root, &mut PrintListing::new(out, false))?;
        Ok(())
    }

    /// Print every directory and full song record under `root`
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Traverse` if the root is missing or the walk fails.
    pub fn print_info_all<W: Write + ?Sized>(&self, root: Option<&str>, out: &mut W) -> Result<()> {
        self.run(root, &mut PrintListing::new(out, true))?;
        Ok(())
    }
}
