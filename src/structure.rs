//! Project structure walking
//!
//! Builds the in-memory tree shown in the structure map: selected root files
//! followed by the configured top-level directories, each listed down to
//! `max_depth` levels.

use std::cmp::Ordering;

use glob::Pattern;

use crate::config::StructureConfig;
use crate::fs::{DirEntry, FileSystem};
use crate::path_utils::{is_hidden, join};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureNode {
    File {
        name: String,
    },
    Dir {
        name: String,
        children: Vec<StructureNode>,
    },
}

impl StructureNode {
    pub fn name(&self) -> &str {
        match self {
            StructureNode::File { name } => name,
            StructureNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, StructureNode::Dir { .. })
    }

    /// Count (directories, files) in a forest, recursively.
    pub fn count(nodes: &[StructureNode]) -> (usize, usize) {
        nodes.iter().fold((0, 0), |(dirs, files), node| match node {
            StructureNode::File { .. } => (dirs, files + 1),
            StructureNode::Dir { children, .. } => {
                let (d, f) = Self::count(children);
                (dirs + 1 + d, files + f)
            }
        })
    }
}

pub struct StructureWalker {
    config: StructureConfig,
    ignore_patterns: Vec<Pattern>,
}

impl StructureWalker {
    pub fn new(config: StructureConfig) -> Self {
        let ignore_patterns = config
            .ignore
            .iter()
            .filter_map(|p| match Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    log::warn!("invalid ignore pattern '{}': {}", p, e);
                    None
                }
            })
            .collect();
        Self {
            config,
            ignore_patterns,
        }
    }

    /// Walk the project: present root files first, then present scan dirs.
    pub fn walk<F: FileSystem + ?Sized>(&self, fs: &F) -> Vec<StructureNode> {
        let mut nodes = Vec::new();

        for file in &self.config.root_files {
            if fs.is_file(file) {
                nodes.push(StructureNode::File { name: file.clone() });
            }
        }

        for dir in &self.config.scan_dirs {
            if fs.is_dir(dir) {
                nodes.push(StructureNode::Dir {
                    name: dir.clone(),
                    children: self.walk_dir(fs, dir, 1),
                });
            } else {
                log::debug!("scan directory '{}' not found, skipping", dir);
            }
        }

        nodes
    }

    fn walk_dir<F: FileSystem + ?Sized>(&self, fs: &F, dir: &str, depth: usize) -> Vec<StructureNode> {
        if depth > self.config.max_depth {
            return Vec::new();
        }

        let mut entries = match fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("error reading {}: {}", dir, e);
                return Vec::new();
            }
        };
        entries.retain(|entry| !self.should_ignore(&entry.name));
        entries.sort_by(compare_entries);

        entries
            .into_iter()
            .map(|entry| {
                if entry.is_dir {
                    let path = join(dir, &entry.name);
                    let children = self.walk_dir(fs, &path, depth + 1);
                    StructureNode::Dir {
                        name: entry.name,
                        children,
                    }
                } else {
                    StructureNode::File { name: entry.name }
                }
            })
            .collect()
    }

    /// Hidden names and configured ignore entries (exact or glob) are skipped.
    pub fn should_ignore(&self, name: &str) -> bool {
        is_hidden(name)
            || self.config.ignore.iter().any(|i| i == name)
            || self.ignore_patterns.iter().any(|p| p.matches(name))
    }
}

/// Directories first, then case-insensitive name order.
fn compare_entries(a: &DirEntry, b: &DirEntry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}
