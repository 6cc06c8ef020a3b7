//! Reverse graph derivation and impact ranking

use super::model::{ForwardGraph, ReverseGraph};

/// A file ranked by how many import edges point at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactEntry {
    pub file: String,
    /// Number of import edges targeting `file` (duplicates included)
    pub importer_count: usize,
    /// The first few importers, in reverse graph order
    pub importers: Vec<String>,
    /// More importers exist than are listed in `importers`
    pub has_more: bool,
}

/// Aggregate numbers for the statistics block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphStats {
    pub total_files: usize,
    pub total_dependencies: usize,
    pub average_dependencies: f64,
}

/// Everything the dependency graph document is rendered from.
#[derive(Debug, Clone)]
pub struct GraphReport {
    pub forward: ForwardGraph,
    pub reverse: ReverseGraph,
    pub ranking: Vec<ImpactEntry>,
}

impl GraphReport {
    /// Derive the reverse graph and impact ranking from a forward graph.
    pub fn build(forward: ForwardGraph, ranking_limit: usize, importer_preview: usize) -> Self {
        let reverse = build_reverse(&forward);
        let ranking = rank_impact(&reverse, ranking_limit, importer_preview);
        Self {
            forward,
            reverse,
            ranking,
        }
    }

    pub fn stats(&self) -> GraphStats {
        let total_files = self.forward.len();
        let total_dependencies = self.forward.edge_count();
        let average_dependencies = if total_files > 0 {
            total_dependencies as f64 / total_files as f64
        } else {
            0.0
        };
        GraphStats {
            total_files,
            total_dependencies,
            average_dependencies,
        }
    }
}

/// Invert a forward graph.
///
/// Every edge `file -> target` appends `file` to `reverse[target]`, so an
/// importer that imports the same target twice is listed twice. Targets are
/// keyed in the order they are first seen.
pub fn build_reverse(forward: &ForwardGraph) -> ReverseGraph {
    let mut reverse = ReverseGraph::new();
    for (file, imports) in forward.iter() {
        for target in imports {
            reverse.push(target, file);
        }
    }
    reverse
}

/// Rank reverse graph targets by importer count, descending.
///
/// The sort is stable, so equal counts keep reverse graph order. At most
/// `limit` entries are returned, each listing up to `preview` importers.
pub fn rank_impact(reverse: &ReverseGraph, limit: usize, preview: usize) -> Vec<ImpactEntry> {
    let mut ranking: Vec<ImpactEntry> = reverse
        .iter()
        .map(|(file, importers)| ImpactEntry {
            file: file.to_string(),
            importer_count: importers.len(),
            importers: importers.iter().take(preview).cloned().collect(),
            has_more: importers.len() > preview,
        })
        .collect();

    ranking.sort_by(|a, b| b.importer_count.cmp(&a.importer_count));
    ranking.truncate(limit);
    ranking
}
