//! Import dependency graph
//!
//! The pipeline is split into small stages so each can be tested against an
//! in-memory filesystem:
//!
//! - `collector` - enumerate source files under the configured directories
//! - `extract` - pull local import specifiers out of source text
//! - `resolver` - map specifiers onto project files
//! - `source` - forward graph producers (built-in analyzer, madge)
//! - `report` - reverse graph, impact ranking and statistics

mod collector;
mod extract;
mod model;
mod report;
mod resolver;
mod source;

pub use collector::collect_source_files;
pub use extract::{extract_specifiers, read_specifiers};
pub use model::{AdjacencyMap, ForwardGraph, ReverseGraph};
pub use report::{GraphReport, GraphStats, ImpactEntry, build_reverse, rank_impact};
pub use resolver::Resolver;
pub use source::{Analysis, BuiltinSource, GraphSource, MadgeSource, analyze, select_graph};
