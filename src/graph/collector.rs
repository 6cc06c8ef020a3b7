//! Source file collection

use crate::config::GraphConfig;
use crate::fs::FileSystem;
use crate::path_utils::{is_hidden, join};

/// Collect all analyzable source files below the configured source directories.
///
/// Paths are returned project-relative, depth-first, with siblings in name
/// order. Missing source directories are skipped silently.
pub fn collect_source_files<F: FileSystem + ?Sized>(fs: &F, config: &GraphConfig) -> Vec<String> {
    let mut files = Vec::new();

    for dir in &config.source_dirs {
        if !fs.is_dir(dir) {
            log::debug!("source directory '{}' not found, skipping", dir);
            continue;
        }
        walk_dir(fs, dir, config, &mut files);
    }

    files
}

fn walk_dir<F: FileSystem + ?Sized>(fs: &F, dir: &str, config: &GraphConfig, files: &mut Vec<String>) {
    let mut entries = match fs.read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("cannot read directory '{}': {}", dir, e);
            return;
        }
    };
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    for entry in entries {
        if is_hidden(&entry.name) {
            continue;
        }
        let path = join(dir, &entry.name);

        if entry.is_dir {
            if config.ignored_dirs.iter().any(|d| *d == entry.name) {
                continue;
            }
            walk_dir(fs, &path, config, files);
        } else if config.has_allowed_extension(&entry.name) {
            files.push(path);
        }
    }
}
