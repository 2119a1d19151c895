//! Bookmark persistence
//!
//! Bookmarks are kept as an ordered list whose order is the bookmark toolbar
//! order, and are written to disk as a flat JSON array:
//!
//! ```json
//! [ { "title": "Example", "url": "https://example.com" } ]
//! ```
//!
//! The whole file is rewritten after every mutation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::utils::{Result, ShellError};

/// Default location of the bookmark file, relative to the working directory
pub const DEFAULT_BOOKMARKS_FILE: &str = "bookmarks.json";

/// A user-saved shortcut
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Display label, may be empty or repeated
    pub title: String,
    /// Target address, stored as given
    pub url: String,
}

impl Bookmark {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Ordered bookmark sequence; index 0 is the leftmost toolbar entry
pub type BookmarkList = Vec<Bookmark>;

/// Durable bookmark list backing the bookmark toolbar
#[derive(Debug)]
pub struct BookmarkStore {
    path: PathBuf,
    bookmarks: BookmarkList,
}

impl BookmarkStore {
    /// Create an empty store bound to `path` without touching the disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            bookmarks: Vec::new(),
        }
    }

    /// Create a store bound to `path` and load whatever is persisted there
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self::new(path);
        store.load()?;
        Ok(store)
    }

    /// Replace the in-memory list with the persisted one.
    ///
    /// A missing file means no bookmarks have been saved yet and yields an
    /// empty list. Content that is not a bookmark array is reported as
    /// [`ShellError::MalformedBookmarks`] and leaves the list untouched.
    pub fn load(&mut self) -> Result<&[Bookmark]> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No bookmark file at {}, starting empty", self.path.display());
                self.bookmarks.clear();
                return Ok(&self.bookmarks);
            }
            Err(e) => return Err(e.into()),
        };

        self.bookmarks =
            serde_json::from_slice(&raw).map_err(|source| ShellError::MalformedBookmarks {
                path: self.path.clone(),
                source,
            })?;
        info!(
            "Loaded {} bookmark(s) from {}",
            self.bookmarks.len(),
            self.path.display()
        );
        Ok(&self.bookmarks)
    }

    /// Append a bookmark at the end of the toolbar. Duplicates are accepted.
    pub fn add(&mut self, title: impl Into<String>, url: impl Into<String>) {
        self.bookmarks.push(Bookmark::new(title, url));
    }

    /// Remove the bookmark at `position`, keeping the order of the others.
    ///
    /// Returns `None` without changing anything when `position` is past the end.
    pub fn remove(&mut self, position: usize) -> Option<Bookmark> {
        if position < self.bookmarks.len() {
            Some(self.bookmarks.remove(position))
        } else {
            None
        }
    }

    /// Overwrite the bookmark file with the full list.
    ///
    /// The write is not atomic; a crash mid-write can leave a truncated file.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.bookmarks)?;
        fs::write(&self.path, json)?;
        debug!(
            "Saved {} bookmark(s) to {}",
            self.bookmarks.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Bookmark at a toolbar position
    pub fn get(&self, position: usize) -> Option<&Bookmark> {
        self.bookmarks.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.bookmarks.iter()
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for BookmarkStore {
    fn default() -> Self {
        Self::new(DEFAULT_BOOKMARKS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> BookmarkStore {
        BookmarkStore::new(dir.path().join(DEFAULT_BOOKMARKS_FILE))
    }

    fn abc(dir: &TempDir) -> BookmarkStore {
        let mut store = store_in(dir);
        store.add("A", "https://a.test");
        store.add("B", "https://b.test");
        store.add("C", "https://c.test");
        store
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = BookmarkStore::open(dir.path().join("nothing-here.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_appends_to_end() {
        let dir = TempDir::new().unwrap();
        let mut store = abc(&dir);
        store.add("D", "https://d.test");

        assert_eq!(store.len(), 4);
        assert_eq!(store.get(3), Some(&Bookmark::new("D", "https://d.test")));
        assert_eq!(store.get(0).map(|b| b.title.as_str()), Some("A"));
    }

    #[test]
    fn test_add_accepts_duplicates_and_empty_titles() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add("", "https://dup.test");
        store.add("", "https://dup.test");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0), store.get(1));
    }

    #[test]
    fn test_remove_interior_preserves_order() {
        let dir = TempDir::new().unwrap();
        let mut store = abc(&dir);

        let removed = store.remove(1);
        assert_eq!(removed, Some(Bookmark::new("B", "https://b.test")));
        let titles: Vec<_> = store.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = abc(&dir);
        assert_eq!(store.remove(3), None);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_remove_then_save_persists_remaining() {
        let dir = TempDir::new().unwrap();
        let mut store = abc(&dir);
        store.remove(1);
        store.save().unwrap();

        let reloaded = BookmarkStore::open(store.path()).unwrap();
        assert_eq!(
            reloaded.bookmarks(),
            &[
                Bookmark::new("A", "https://a.test"),
                Bookmark::new("C", "https://c.test"),
            ]
        );
    }

    #[test]
    fn test_file_format() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add("Example", "https://example.com");
        store.save().unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "title": "Example", "url": "https://example.com" }])
        );
    }

    #[test]
    fn test_reads_compact_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_BOOKMARKS_FILE);
        fs::write(&path, r#"[{"title": "Docs", "url": "https://docs.rs"}]"#).unwrap();

        let store = BookmarkStore::open(&path).unwrap();
        assert_eq!(store.bookmarks(), &[Bookmark::new("Docs", "https://docs.rs")]);
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_BOOKMARKS_FILE);
        fs::write(&path, r#"{"title": "not a list"}"#).unwrap();

        let err = BookmarkStore::open(&path).unwrap_err();
        assert!(matches!(err, ShellError::MalformedBookmarks { .. }));
    }

    #[test]
    fn test_non_utf8_file_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_BOOKMARKS_FILE);
        fs::write(&path, [b'[', b' ', 0xFF, b' ', b']']).unwrap();

        let err = BookmarkStore::open(&path).unwrap_err();
        assert!(matches!(err, ShellError::MalformedBookmarks { .. }));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_failed_load_keeps_current_list() {
        let dir = TempDir::new().unwrap();
        let mut store = abc(&dir);
        fs::write(store.path(), "[{").unwrap();

        assert!(store.load().is_err());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let mut store = BookmarkStore::new(dir.path().join("missing").join("bookmarks.json"));
        store.add("A", "https://a.test");
        assert!(matches!(store.save(), Err(ShellError::Io(_))));
    }

    fn bookmark_strategy() -> impl Strategy<Value = Bookmark> {
        (any::<String>(), any::<String>()).prop_map(|(title, url)| Bookmark { title, url })
    }

    proptest! {
        #[test]
        fn test_save_then_load_is_identity(list in prop::collection::vec(bookmark_strategy(), 0..16)) {
            let dir = TempDir::new().unwrap();
            let mut store = store_in(&dir);
            for b in &list {
                store.add(b.title.clone(), b.url.clone());
            }
            store.save().unwrap();

            let reloaded = BookmarkStore::open(store.path()).unwrap();
            prop_assert_eq!(reloaded.bookmarks(), list.as_slice());
        }
    }
}
