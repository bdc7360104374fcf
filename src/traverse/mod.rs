//! Depth-first catalog traversal
//!
//! Every catalog operation is one call to [`walk`] with an operation-specific
//! [`Visitor`]. The engine does no filtering of its own: it reports each
//! directory, then that directory's songs, then recurses into its children,
//! all in the catalog's native order. The path-less catalog root is never
//! reported as a directory, but its songs and children are visited.
//!
//! The caller passes a catalog borrowed from a [`SharedCatalog`] read guard
//! and keeps the guard for the whole walk.
//!
//! [`SharedCatalog`]: crate::catalog::SharedCatalog

pub mod error;

pub use error::TraverseError;

use crate::catalog::{Catalog, Directory, Song};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Per-operation traversal callbacks
///
/// Both methods default to doing nothing, so a visitor only implements the
/// events it cares about. The implementing type is the operation's context.
pub trait Visitor {
    /// Called once per visited directory with a path
    ///
    /// # Errors
    ///
    /// An error stops the traversal and is returned from [`walk`].
    fn visit_directory(&mut self, _directory: &Directory) -> Result<(), TraverseError> {
        Ok(())
    }

    /// Called once per song directly inside a visited directory
    ///
    /// # Errors
    ///
    /// An error stops the traversal and is returned from [`walk`].
    fn visit_song(&mut self, _song: &Song) -> Result<(), TraverseError> {
        Ok(())
    }
}

/// Cooperative cancellation flag shared between a request and its owner
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    cancelled: Arc<AtomicBool>,
}

impl Cancellation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask running traversals to stop at the next directory boundary
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Clear the flag so the owner can issue new requests
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Walk the subtree at `root`, or the whole catalog when `root` is `None` or empty
///
/// # Errors
///
/// - `TraverseError::DirectoryNotFound` if `root` does not exist; no visitor
///   method has been called in that case
/// - `TraverseError::Cancelled` if `cancel` was set at a directory boundary
/// - any error returned by the visitor
pub fn walk<V: Visitor + ?Sized>(
    catalog: &Catalog,
    root: Option<&str>,
    visitor: &mut V,
    cancel: &Cancellation,
) -> Result<(), TraverseError> {
    let start = match root {
        Some(path) => catalog
            .lookup_directory(path)
            .ok_or_else(|| TraverseError::DirectoryNotFound(path.to_string()))?,
        None => catalog.root(),
    };

    walk_directory(start, visitor, cancel)
}

fn walk_directory<V: Visitor + ?Sized>(
    directory: &Directory,
    visitor: &mut V,
    cancel: &Cancellation,
) -> Result<(), TraverseError> {
    if cancel.is_cancelled() {
        return Err(TraverseError::Cancelled);
    }

    if directory.path().is_some() {
        visitor.visit_directory(directory)?;
    }

    for song in directory.songs() {
        visitor.visit_song(song)?;
    }

    for child in directory.children() {
        walk_directory(child, visitor, cancel)?;
    }

    Ok(())
}
