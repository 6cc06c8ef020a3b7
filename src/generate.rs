//! End-to-end document generation
//!
//! Glue between the analysis modules and the renderers. Each generator reads
//! the project through an [`OsFileSystem`] rooted at `root`, renders its
//! document and reports a [`Summary`]; writing is left to the caller so the
//! binary can print to stdout instead.

use std::path::{Path, PathBuf};

use crate::config::{GraphConfig, StructureConfig};
use crate::error::{Error, Result};
use crate::fs::{FileSystem, OsFileSystem};
use crate::graph::{GraphReport, analyze};
use crate::output::{Summary, format_number, render_graph_markdown, render_structure_markdown, render_tree};
use crate::structure::{StructureNode, StructureWalker};

/// A rendered document and the numbers worth echoing to the console.
#[derive(Debug, Clone)]
pub struct Document {
    pub content: String,
    pub rows: Vec<(&'static str, String)>,
}

impl Document {
    /// Summary for this document, pointing at `output` when it was written.
    pub fn summary(&self, output: Option<PathBuf>) -> Summary {
        Summary {
            output,
            rows: self.rows.clone(),
        }
    }
}

/// Analyze imports and render the dependency graph document.
pub fn generate_graph(root: &Path, config: &GraphConfig, timestamp: &str) -> Result<Document> {
    log::info!("analyzing code dependencies in {}", root.display());
    let fs = OsFileSystem::new(root);
    generate_graph_with(root, &fs, config, timestamp)
}

/// Same as [`generate_graph`] over an arbitrary filesystem.
///
/// `root` is only used by the external analyzer, which runs on the real disk.
pub fn generate_graph_with<F: FileSystem + ?Sized>(
    root: &Path,
    fs: &F,
    config: &GraphConfig,
    timestamp: &str,
) -> Result<Document> {
    let analysis = analyze(root, fs, config)?;
    let report = GraphReport::build(analysis.forward, config.ranking_limit, config.importer_preview);
    let content = render_graph_markdown(&report, analysis.source, config, timestamp)?;

    Ok(Document {
        content,
        rows: vec![
            ("Files analyzed", report.forward.len().to_string()),
            ("Dependencies", report.stats().total_dependencies.to_string()),
            ("High-impact files", report.ranking.len().to_string()),
            ("Analyzer", analysis.source.to_string()),
        ],
    })
}

/// Walk the project and render the structure document.
pub fn generate_structure(root: &Path, config: &StructureConfig, timestamp: &str) -> Result<Document> {
    log::info!("scanning project structure in {}", root.display());
    let fs = OsFileSystem::new(root);
    let name = project_name(root, config);
    Ok(generate_structure_with(&fs, &name, config, timestamp))
}

/// Same as [`generate_structure`] over an arbitrary filesystem.
pub fn generate_structure_with<F: FileSystem + ?Sized>(
    fs: &F,
    project_name: &str,
    config: &StructureConfig,
    timestamp: &str,
) -> Document {
    let nodes = StructureWalker::new(config.clone()).walk(fs);
    let (dirs, files) = StructureNode::count(&nodes);
    let lines = render_tree(&nodes);
    let content = render_structure_markdown(project_name, &lines, config, timestamp);

    Document {
        rows: vec![
            ("Total lines", format_number(content.lines().count())),
            ("Directories scanned", config.scan_dirs.len().to_string()),
            ("Entries listed", format!("{} directories, {} files", dirs, files)),
        ],
        content,
    }
}

/// Write a document, creating missing parent directories.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io("cannot create directory", parent, e))?;
        }
    }
    std::fs::write(path, content).map_err(|e| Error::io("cannot write", path, e))
}

/// Heading for the structure tree: configured name, else the root's directory name.
pub fn project_name(root: &Path, config: &StructureConfig) -> String {
    if let Some(name) = &config.project_name {
        return name.clone();
    }
    root.canonicalize()
        .ok()
        .as_deref()
        .unwrap_or(root)
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string())
}
