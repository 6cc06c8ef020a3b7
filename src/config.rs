//! Configuration types
//!
//! Defaults reproduce the conventional layout of a Next.js style project.
//! A `scopemap.toml` at the project root may override any key; CLI flags are
//! applied on top by the binary.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "scopemap.toml";

/// Configuration for the dependency graph analysis.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Top-level directories to analyze, relative to the project root.
    pub source_dirs: Vec<String>,
    /// Allowed source extensions, in resolution precedence order.
    pub extensions: Vec<String>,
    /// Directory names never descended into.
    pub ignored_dirs: Vec<String>,
    /// Specifier prefix that maps to the project root.
    pub root_alias: String,
    /// Number of entries kept in the impact ranking.
    pub ranking_limit: usize,
    /// Number of importers listed per ranked file.
    pub importer_preview: usize,
    /// Number of parallel workers for import extraction.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential (no parallelism)
    /// N = use N worker threads
    pub jobs: usize,
    /// Skip probing for madge and always use the built-in analyzer.
    pub builtin_only: bool,
    /// Output document, relative to the project root.
    pub output: PathBuf,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            source_dirs: to_strings(&["app", "components", "lib", "utils", "hooks", "context"]),
            extensions: to_strings(&[".ts", ".tsx", ".js", ".jsx"]),
            ignored_dirs: to_strings(&["node_modules"]),
            root_alias: "@/".to_string(),
            ranking_limit: 20,
            importer_preview: 5,
            jobs: 0,
            builtin_only: false,
            output: PathBuf::from("_DOCS/06_DEPENDENCY_GRAPH.md"),
        }
    }
}

impl GraphConfig {
    /// Check whether a file name carries one of the allowed extensions.
    pub fn has_allowed_extension(&self, name: &str) -> bool {
        crate::path_utils::extension(name).is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    /// Extensions without the leading dot, as a comma separated list (`ts,tsx`).
    pub fn extension_list(&self) -> String {
        self.extensions
            .iter()
            .map(|e| e.trim_start_matches('.'))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Configuration for the project structure map.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StructureConfig {
    /// Names (or glob patterns) that are never listed.
    pub ignore: Vec<String>,
    /// Top-level directories to list, in display order.
    pub scan_dirs: Vec<String>,
    /// Root files listed before the directories when present.
    pub root_files: Vec<String>,
    /// Levels listed below each scanned directory.
    pub max_depth: usize,
    /// Heading of the tree; defaults to the project root's directory name.
    pub project_name: Option<String>,
    /// Output document, relative to the project root.
    pub output: PathBuf,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            ignore: to_strings(&[
                "node_modules",
                ".git",
                ".next",
                "dist",
                "build",
                ".turbo",
                ".vercel",
                "coverage",
                ".DS_Store",
                "Thumbs.db",
                "package-lock.json",
                "yarn.lock",
                "pnpm-lock.yaml",
            ]),
            scan_dirs: to_strings(&[
                "_DOCS",
                "_TASK",
                ".agent",
                "app",
                "components",
                "context",
                "hooks",
                "lib",
                "public",
                "utils",
                "scripts",
            ]),
            root_files: to_strings(&[
                "package.json",
                "tsconfig.json",
                "next.config.ts",
                "postcss.config.mjs",
                "eslint.config.mjs",
                "tailwind.config.ts",
            ]),
            max_depth: 6,
            project_name: None,
            output: PathBuf::from("_DOCS/00_STRUCTURE.md"),
        }
    }
}

/// Top-level configuration, mirroring the layout of `scopemap.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub graph: GraphConfig,
    pub structure: StructureConfig,
}

impl Config {
    /// Load `scopemap.toml` from the project root, falling back to defaults
    /// when the file does not exist.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            log::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, root.display());
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).map_err(|e| Error::io("cannot read", &path, e))?;
        let config = Self::parse(&content).map_err(|source| Error::Config {
            path: path.clone(),
            source,
        })?;
        log::debug!("loaded {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
