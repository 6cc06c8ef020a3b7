//! Import specifier resolution

use crate::config::GraphConfig;
use crate::fs::FileSystem;
use crate::path_utils::{join, normalize, parent};

/// Resolves import specifiers to project files.
///
/// Resolution order for a base path `p`:
/// 1. `p<ext>` for each allowed extension, in configured order
/// 2. `p/index<ext>` for each allowed extension, in configured order
///
/// The first existing file wins, so `x.ts` shadows `x.tsx` and `x/index.ts`.
pub struct Resolver<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    config: &'a GraphConfig,
}

impl<'a, F: FileSystem + ?Sized> Resolver<'a, F> {
    pub fn new(fs: &'a F, config: &'a GraphConfig) -> Self {
        Self { fs, config }
    }

    /// Resolve `specifier` as imported from `from_file`.
    ///
    /// Returns the project-relative path of the target, or `None` if no file
    /// matches or the path escapes the project root.
    pub fn resolve(&self, from_file: &str, specifier: &str) -> Option<String> {
        let base = match self.strip_alias(specifier) {
            Some(rooted) => rooted.to_string(),
            None => join(parent(from_file), specifier),
        };
        let base = normalize(&base)?;

        self.resolve_file(&base).or_else(|| self.resolve_index(&base))
    }

    fn strip_alias<'s>(&self, specifier: &'s str) -> Option<&'s str> {
        if self.config.root_alias.is_empty() {
            return None;
        }
        specifier.strip_prefix(self.config.root_alias.as_str())
    }

    fn resolve_file(&self, base: &str) -> Option<String> {
        if base.is_empty() {
            return None;
        }
        self.config
            .extensions
            .iter()
            .map(|ext| format!("{}{}", base, ext))
            .find(|candidate| self.fs.is_file(candidate))
    }

    fn resolve_index(&self, base: &str) -> Option<String> {
        self.config
            .extensions
            .iter()
            .map(|ext| join(base, &format!("index{}", ext)))
            .find(|candidate| self.fs.is_file(candidate))
    }
}
