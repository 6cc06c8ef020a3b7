//! Read-only filesystem capability
//!
//! The analyzer and the structure walker never touch `std::fs` directly.
//! They go through [`FileSystem`], which addresses entries by project-relative
//! `/`-separated paths (see [`crate::path_utils`]). [`OsFileSystem`] maps those
//! paths onto a real project root; [`MemoryFileSystem`] keeps a synthetic tree
//! in memory for tests.

use std::io;
use std::path::PathBuf;

#[cfg(any(test, feature = "test-utils"))]
use std::collections::{BTreeMap, BTreeSet};

#[cfg(any(test, feature = "test-utils"))]
use crate::path_utils;

/// A single directory entry returned by [`FileSystem::read_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Minimal read-only view of a project tree.
///
/// `Sync` is required so per-file extraction can fan out across a rayon pool.
pub trait FileSystem: Sync {
    /// List the entries of a directory. Order is unspecified.
    fn read_dir(&self, dir: &str) -> io::Result<Vec<DirEntry>>;

    fn read_to_string(&self, path: &str) -> io::Result<String>;

    fn is_file(&self, path: &str) -> bool;

    fn is_dir(&self, path: &str) -> bool;
}

/// [`FileSystem`] backed by the real disk below `root`.
#[derive(Debug, Clone)]
pub struct OsFileSystem {
    root: PathBuf,
}

impl OsFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn full_path(&self, rel: &str) -> PathBuf {
        if rel.is_empty() {
            self.root.clone()
        } else {
            self.root.join(rel)
        }
    }
}

impl FileSystem for OsFileSystem {
    fn read_dir(&self, dir: &str) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(self.full_path(dir))? {
            let entry = entry.and_then(|e| {
                let file_type = e.file_type()?;
                Ok((e, file_type))
            });
            let Some((entry, file_type)) = keep_readable(dir, entry) else {
                continue;
            };
            // Skip symlinks to prevent infinite loops
            if file_type.is_symlink() {
                continue;
            }
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: file_type.is_dir(),
            });
        }
        Ok(entries)
    }

    fn read_to_string(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(self.full_path(path))
    }

    fn is_file(&self, path: &str) -> bool {
        self.full_path(path).is_file()
    }

    fn is_dir(&self, path: &str) -> bool {
        self.full_path(path).is_dir()
    }
}

/// A single unreadable entry is skipped rather than failing the listing.
fn keep_readable<T>(dir: &str, entry: io::Result<T>) -> Option<T> {
    match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
            log::debug!("skipping unreadable entry in '{}': {}", dir, e);
            None
        }
    }
}

/// In-memory [`FileSystem`] for tests and benchmarks.
///
/// Directories are implied by the files added below them; empty directories
/// can be added explicitly with [`MemoryFileSystem::add_dir`].
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: BTreeMap<String, Option<String>>,
    dirs: BTreeSet<String>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper: add a file with the given contents.
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn add_file(&mut self, path: &str, content: &str) {
        self.register_parents(path);
        self.files.insert(path.to_string(), Some(content.to_string()));
    }

    /// Add a file that exists but fails to read (e.g. invalid UTF-8).
    pub fn add_unreadable(&mut self, path: &str) {
        self.register_parents(path);
        self.files.insert(path.to_string(), None);
    }

    pub fn add_dir(&mut self, path: &str) {
        self.register_parents(path);
        self.dirs.insert(path.to_string());
    }

    fn register_parents(&mut self, path: &str) {
        let mut dir = path_utils::parent(path);
        while !dir.is_empty() {
            self.dirs.insert(dir.to_string());
            dir = path_utils::parent(dir);
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl FileSystem for MemoryFileSystem {
    fn read_dir(&self, dir: &str) -> io::Result<Vec<DirEntry>> {
        if !dir.is_empty() && !self.dirs.contains(dir) {
            return Err(io::Error::new(io::ErrorKind::NotFound, dir.to_string()));
        }
        let is_child = |path: &str| path_utils::parent(path) == dir;
        let dirs = self
            .dirs
            .iter()
            .filter(|d| is_child(d.as_str()))
            .map(|d| DirEntry::dir(path_utils::file_name(d)));
        let files = self
            .files
            .keys()
            .filter(|f| is_child(f.as_str()))
            .map(|f| DirEntry::file(path_utils::file_name(f)));
        Ok(dirs.chain(files).collect())
    }

    fn read_to_string(&self, path: &str) -> io::Result<String> {
        match self.files.get(path) {
            Some(Some(content)) => Ok(content.clone()),
            Some(None) => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            )),
            None => Err(io::Error::new(io::ErrorKind::NotFound, path.to_string())),
        }
    }

    fn is_file(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    fn is_dir(&self, path: &str) -> bool {
        path.is_empty() || self.dirs.contains(path)
    }
}
