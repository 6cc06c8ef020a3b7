//! Forward graph producers
//!
//! A [`GraphSource`] turns a project into a [`ForwardGraph`]. Two sources
//! exist: [`BuiltinSource`] (regex extraction plus path resolution) and
//! [`MadgeSource`] (the `madge` CLI, when installed). [`analyze`] prefers
//! madge and falls back to the built-in analyzer whenever madge is missing or
//! fails.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use rayon::prelude::*;

use crate::config::GraphConfig;
use crate::error::{Error, Result};
use crate::fs::FileSystem;

use super::collector::collect_source_files;
use super::extract::read_specifiers;
use super::model::ForwardGraph;
use super::resolver::Resolver;

/// Something that can produce the forward import graph of a project.
pub trait GraphSource {
    /// Short name used in logs and the console summary.
    fn name(&self) -> &'static str;

    /// Cheap probe; sources that report `false` are never asked for a graph.
    fn is_available(&self) -> bool;

    fn forward_graph(&self) -> Result<ForwardGraph>;
}

/// Result of [`analyze`]: the graph plus the name of the source that built it.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub forward: ForwardGraph,
    pub source: &'static str,
}

/// Built-in analyzer: collect, extract, resolve.
pub struct BuiltinSource<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    config: &'a GraphConfig,
}

impl<'a, F: FileSystem + ?Sized> BuiltinSource<'a, F> {
    pub fn new(fs: &'a F, config: &'a GraphConfig) -> Self {
        Self { fs, config }
    }

    /// Resolved imports of a single file, in source order.
    fn analyze_file(&self, resolver: &Resolver<'_, F>, file: &str) -> Vec<String> {
        read_specifiers(self.fs, file, &self.config.root_alias)
            .iter()
            .filter_map(|spec| {
                let resolved = resolver.resolve(file, spec);
                if resolved.is_none() {
                    log::trace!("{}: unresolved import '{}'", file, spec);
                }
                resolved
            })
            .collect()
    }

    fn analyze_all(&self, files: &[String]) -> Vec<Vec<String>> {
        let resolver = Resolver::new(self.fs, self.config);
        let per_file = |file: &String| self.analyze_file(&resolver, file);

        match self.config.jobs {
            1 => files.iter().map(per_file).collect(),
            0 => files.par_iter().map(per_file).collect(),
            n => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
                Ok(pool) => pool.install(|| files.par_iter().map(per_file).collect()),
                Err(e) => {
                    // Fall back to rayon's global pool if custom pool creation fails
                    log::debug!("cannot build {}-thread pool: {}", n, e);
                    files.par_iter().map(per_file).collect()
                }
            },
        }
    }
}

impl<F: FileSystem + ?Sized> GraphSource for BuiltinSource<'_, F> {
    fn name(&self) -> &'static str {
        "built-in"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn forward_graph(&self) -> Result<ForwardGraph> {
        let files = collect_source_files(self.fs, self.config);
        log::debug!("collected {} source files", files.len());

        let imports = self.analyze_all(&files);

        // par_iter().collect() preserves input order, so keys follow collection order
        let forward = files
            .into_iter()
            .zip(imports)
            .filter(|(_, imports)| !imports.is_empty())
            .collect();
        Ok(forward)
    }
}

/// External analyzer backed by the `madge` CLI.
pub struct MadgeSource {
    program: String,
    root: PathBuf,
    source_dirs: Vec<String>,
    extensions: String,
}

impl MadgeSource {
    pub fn new(root: &Path, config: &GraphConfig) -> Self {
        Self {
            program: "madge".to_string(),
            root: root.to_path_buf(),
            source_dirs: config.source_dirs.clone(),
            extensions: config.extension_list(),
        }
    }

    /// Use a different executable (e.g. a wrapper script or a pinned path).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn existing_dirs(&self) -> Vec<&str> {
        self.source_dirs
            .iter()
            .map(String::as_str)
            .filter(|dir| self.root.join(dir).is_dir())
            .collect()
    }
}

impl GraphSource for MadgeSource {
    fn name(&self) -> &'static str {
        "madge"
    }

    fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success())
    }

    fn forward_graph(&self) -> Result<ForwardGraph> {
        let dirs = self.existing_dirs();
        if dirs.is_empty() {
            log::warn!("no source directories found, creating empty graph");
            return Ok(ForwardGraph::new());
        }

        let output = Command::new(&self.program)
            .args(["--json", "--basedir", ".", "--extensions", self.extensions.as_str()])
            .args(&dirs)
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::analyzer("madge", format!("cannot run '{}': {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::analyzer(
                "madge",
                format!("{}: {}", output.status, stderr.trim()),
            ));
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|e| Error::analyzer("madge", format!("malformed output: {}", e)))
    }
}

/// Ask each available source in turn; the first graph produced wins.
///
/// Failures are logged and the next source is tried. If every source fails
/// the last error is returned.
pub fn select_graph(sources: &[&dyn GraphSource]) -> Result<Analysis> {
    let mut last_error = None;

    for source in sources {
        if !source.is_available() {
            log::info!("{} analyzer not available", source.name());
            continue;
        }
        log::info!("using {} analyzer for dependency analysis", source.name());
        match source.forward_graph() {
            Ok(forward) => {
                return Ok(Analysis {
                    forward,
                    source: source.name(),
                });
            }
            Err(e) => {
                log::warn!("{}; trying next analyzer", e);
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| Error::analyzer("analysis", "no analyzer available")))
}

/// Build the forward graph for the project at `root`.
///
/// Uses madge when installed (unless `config.builtin_only`), otherwise or on
/// failure the built-in analyzer.
pub fn analyze<F: FileSystem + ?Sized>(root: &Path, fs: &F, config: &GraphConfig) -> Result<Analysis> {
    let builtin = BuiltinSource::new(fs, config);
    if config.builtin_only {
        return select_graph(&[&builtin]);
    }
    let madge = MadgeSource::new(root, config);
    select_graph(&[&madge, &builtin])
}
