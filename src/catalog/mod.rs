//! In-memory music catalog
//!
//! The catalog is a tree of [`Directory`] nodes rooted at an implicit,
//! path-less root. Each directory owns its child directories and its songs;
//! there are no parent pointers. Child and song order is the catalog's native
//! order (insertion order) and every traversal preserves it.
//!
//! Catalogs are built and replaced by the persistence side (see
//! [`crate::db::Database::load_catalog`]); the query layer only reads them
//! through a [`SharedCatalog`] read guard.

pub mod shared;
pub mod tag;

pub use shared::SharedCatalog;
pub use tag::{Tag, TagItem, TagType};

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// A song: a catalog-unique URL plus optional metadata
#[derive(Encode, Decode, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Song {
    /// Path relative to the music root, e.g. `rock/a.mp3`
    pub url: String,
    pub tag: Option<Tag>,
}

impl Song {
    #[must_use]
    pub fn new(url: impl Into<String>, tag: Option<Tag>) -> Self {
        Self {
            url: url.into(),
            tag,
        }
    }

    /// Path of the directory containing this song, empty for the root
    #[must_use]
    pub fn directory_path(&self) -> &str {
        self.url.rsplit_once('/').map_or("", |(dir, _)| dir)
    }

    /// Duration in seconds if the song has a tag with a known duration
    #[must_use]
    pub fn duration(&self) -> Option<u32> {
        self.tag.as_ref().and_then(|tag| tag.duration)
    }
}

/// A catalog node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    path: Option<String>,
    children: Vec<Directory>,
    songs: Vec<Song>,
}

impl Directory {
    /// The implicit catalog root
    #[must_use]
    pub const fn root() -> Self {
        Self {
            path: None,
            children: Vec::new(),
            songs: Vec::new(),
        }
    }

    /// An empty directory at `path`; an empty path yields the root
    ///
    /// Empty components are dropped, so `"rock/"` and `"/rock"` both name
    /// `rock` and `"/"` names the root.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        let path: String = path.into();
        let path = components(&path).collect::<Vec<_>>().join("/");
        Self {
            path: (!path.is_empty()).then_some(path),
            children: Vec::new(),
            songs: Vec::new(),
        }
    }

    /// Full path, `None` for the catalog root
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Last path component
    #[must_use]
    pub fn name(&self) -> &str {
        self.path
            .as_deref()
            .map_or("", |path| path.rsplit_once('/').map_or(path, |(_, name)| name))
    }

    #[must_use]
    pub fn children(&self) -> &[Directory] {
        &self.children
    }

    #[must_use]
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Direct child by name
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name() == name)
    }

    fn child_mut(&mut self, name: &str) -> Option<&mut Self> {
        self.children.iter_mut().find(|child| child.name() == name)
    }

    /// Append a song; the caller is responsible for the URL living under this path
    pub fn push_song(&mut self, song: Song) {
        self.songs.push(song);
    }

    /// Append a child directory
    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Child `name`, created at the end of the child list when missing
    fn child_or_insert(&mut self, name: &str) -> &mut Self {
        let index = match self.children.iter().position(|child| child.name() == name) {
            Some(index) => index,
            None => {
                let path = match &self.path {
                    Some(parent) => format!("{parent}/{name}"),
                    None => name.to_string(),
                };
                self.children.push(Self::new(path));
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }
}

/// The whole catalog tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    root: Directory,
}

impl Catalog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: Directory::root(),
        }
    }

    /// Build a catalog from songs, creating directories as they are first seen
    ///
    /// Native order is the order of the input, so callers wanting a sorted
    /// catalog pass songs sorted by URL.
    pub fn from_songs(songs: impl IntoIterator<Item = Song>) -> Self {
        let mut catalog = Self::new();
        for song in songs {
            catalog.insert_song(song);
        }
        catalog
    }

    #[must_use]
    pub const fn root(&self) -> &Directory {
        &self.root
    }

    /// Find a directory by path; the empty path is the root
    #[must_use]
    pub fn lookup_directory(&self, path: &str) -> Option<&Directory> {
        components(path).try_fold(&self.root, |dir, name| dir.child(name))
    }

    /// Insert a song, creating missing parent directories
    pub fn insert_song(&mut self, song: Song) {
        let dir = self.directory_or_insert(song.directory_path());
        dir.push_song(song);
    }

    /// Swap in a subtree at its own path, returning the replaced node
    ///
    /// A subtree without a path replaces the whole tree. Missing ancestors are
    /// created. Only ever called under the write lock of a [`SharedCatalog`].
    pub fn replace_subtree(&mut self, subtree: Directory) -> Option<Directory> {
        let Some(path) = subtree.path().map(str::to_string) else {
            return Some(std::mem::replace(&mut self.root, subtree));
        };

        let (parent_path, name) = path.rsplit_once('/').unwrap_or(("", path.as_str()));
        let parent = self.directory_or_insert(parent_path);
        match parent.child_mut(name) {
            Some(existing) => Some(std::mem::replace(existing, subtree)),
            None => {
                parent.push_child(subtree);
                None
            }
        }
    }

    fn directory_or_insert(&mut self, path: &str) -> &mut Directory {
        components(path).fold(&mut self.root, |dir, name| dir.child_or_insert(name))
    }
}

fn components(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|part| !part.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_songs([
            Song::new("top.mp3", None),
            Song::new("rock/a.mp3", None),
            Song::new("rock/live/c.mp3", None),
            Song::new("rock/b.mp3", None),
            Song::new("jazz/d.mp3", None),
        ])
    }

    #[test]
    fn test_from_songs_builds_nested_directories() {
        let catalog = sample();
        let root = catalog.root();

        assert_eq!(root.path(), None);
        assert_eq!(root.songs().len(), 1);
        let names: Vec<_> = root.children().iter().map(Directory::name).collect();
        assert_eq!(names, vec!["rock", "jazz"]);

        let rock = catalog.lookup_directory("rock").unwrap();
        assert_eq!(rock.songs().len(), 2);
        assert_eq!(rock.songs()[1].url, "rock/b.mp3");

        let live = catalog.lookup_directory("rock/live").unwrap();
        assert_eq!(live.path(), Some("rock/live"));
        assert_eq!(live.name(), "live");
    }

    #[test]
    fn test_lookup_missing_directory() {
        let catalog = sample();
        assert!(catalog.lookup_directory("pop").is_none());
        assert!(catalog.lookup_directory("rock/studio").is_none());
    }

    #[test]
    fn test_lookup_empty_path_is_root() {
        let catalog = sample();
        assert_eq!(catalog.lookup_directory(""), Some(catalog.root()));
    }

    #[test]
    fn test_song_directory_path() {
        assert_eq!(Song::new("a/b/c.mp3", None).directory_path(), "a/b");
        assert_eq!(Song::new("c.mp3", None).directory_path(), "");
    }

    #[test]
    fn test_replace_existing_subtree() {
        let mut catalog = sample();
        let mut fresh = Directory::new("rock");
        fresh.push_song(Song::new("rock/z.mp3", None));

        let old = catalog.replace_subtree(fresh).unwrap();
        assert_eq!(old.songs().len(), 2);

        let rock = catalog.lookup_directory("rock").unwrap();
        assert_eq!(rock.songs().len(), 1);
        assert!(rock.children().is_empty());
        // Sibling order is untouched
        let names: Vec<_> = catalog.root().children().iter().map(Directory::name).collect();
        assert_eq!(names, vec!["rock", "jazz"]);
    }

    #[test]
    fn test_replace_missing_subtree_inserts() {
        let mut catalog = sample();
        let fresh = Directory::new("pop/90s");

        assert!(catalog.replace_subtree(fresh).is_none());
        assert!(catalog.lookup_directory("pop/90s").is_some());
    }

    #[test]
    fn test_directory_path_is_normalized() {
        assert_eq!(Directory::new("rock/").path(), Some("rock"));
        assert_eq!(Directory::new("/rock//live/").path(), Some("rock/live"));
        assert_eq!(Directory::new("rock/live/").name(), "live");
        assert_eq!(Directory::new("/").path(), None);
    }

    #[test]
    fn test_replace_subtree_with_trailing_slash() {
        let mut catalog = sample();
        let mut fresh = Directory::new("rock/");
        fresh.push_song(Song::new("rock/z.mp3", None));

        assert_eq!(catalog.replace_subtree(fresh).unwrap().songs().len(), 2);

        let rock = catalog.lookup_directory("rock").unwrap();
        assert_eq!(rock.songs().len(), 1);
        assert!(rock.children().iter().all(|child| !child.name().is_empty()));
        assert_eq!(catalog.root().children().len(), 2);
    }

    #[test]
    fn test_replace_root() {
        let mut catalog = sample();
        let old = catalog.replace_subtree(Directory::root()).unwrap();

        assert_eq!(old.children().len(), 2);
        assert!(catalog.root().children().is_empty());
    }
}
