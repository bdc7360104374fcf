//! Visitors backing each catalog operation

use crate::catalog::{Directory, Song};
use crate::collector::DistinctValues;
use crate::locate::{ExactMatcher, SongMatcher};
use crate::output;
use crate::playlist::SongSink;
use crate::traverse::{TraverseError, Visitor};
use std::io::Write;

/// Prints the full record of every song accepted by the matcher
pub struct PrintMatching<'a, M, W: ?Sized> {
    matcher: M,
    out: &'a mut W,
    pub matched: usize,
}

impl<'a, M, W: Write + ?Sized> PrintMatching<'a, M, W> {
    pub fn new(matcher: M, out: &'a mut W) -> Self {
        Self {
            matcher,
            out,
            matched: 0,
        }
    }
}

impl<M: SongMatcher, W: Write + ?Sized> Visitor for PrintMatching<'_, M, W> {
    fn visit_song(&mut self, song: &Song) -> Result<(), TraverseError> {
        if self.matcher.matches(song) {
            output::write_song_info(&mut *self.out, song)?;
            self.matched += 1;
        }
        Ok(())
    }
}

/// Counts songs
#[derive(Debug, Default)]
pub struct SongCount(pub u64);

impl Visitor for SongCount {
    fn visit_song(&mut self, _song: &Song) -> Result<(), TraverseError> {
        self.0 += 1;
        Ok(())
    }
}

/// Sums known durations; unknown ones add nothing
#[derive(Debug, Default)]
pub struct DurationSum(pub u64);

impl Visitor for DurationSum {
    fn visit_song(&mut self, song: &Song) -> Result<(), TraverseError> {
        if let Some(seconds) = song.duration() {
            self.0 += u64::from(seconds);
        }
        Ok(())
    }
}

/// Feeds the values of exactly matching songs into a collector
pub struct CollectUnique<'a> {
    matcher: ExactMatcher<'a>,
    pub values: DistinctValues,
}

impl<'a> CollectUnique<'a> {
    pub const fn new(matcher: ExactMatcher<'a>, values: DistinctValues) -> Self {
        Self { matcher, values }
    }
}

impl Visitor for CollectUnique<'_> {
    fn visit_song(&mut self, song: &Song) -> Result<(), TraverseError> {
        if self.matcher.matches(song) {
            self.values.visit(song);
        }
        Ok(())
    }
}

/// Appends every song to a sink
pub struct Populate<'a, S: ?Sized> {
    sink: &'a mut S,
    pub added: usize,
}

impl<'a, S: SongSink + ?Sized> Populate<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink, added: 0 }
    }
}

impl<S: SongSink + ?Sized> Visitor for Populate<'_, S> {
    fn visit_song(&mut self, song: &Song) -> Result<(), TraverseError> {
        self.sink.append(song)?;
        self.added += 1;
        Ok(())
    }
}

/// Prints every directory and song, songs either as URLs or full records
pub struct PrintListing<'a, W: ?Sized> {
    out: &'a mut W,
    full_info: bool,
}

impl<'a, W: Write + ?Sized> PrintListing<'a, W> {
    pub fn new(out: &'a mut W, full_info: bool) -> Self {
        Self { out, full_info }
    }
}

impl<W: Write + ?Sized> Visitor for PrintListing<'_, W> {
    fn visit_directory(&mut self, directory: &Directory) -> Result<(), TraverseError> {
        output::write_directory(&mut *self.out, directory)?;
        Ok(())
    }

    fn visit_song(&mut self, song: &Song) -> Result<(), TraverseError> {
        if self.full_info {
            output::write_song_info(&mut *self.out, song)?;
        } else {
            output::write_song_url(&mut *self.out, song)?;
        }
        Ok(())
    }
}
