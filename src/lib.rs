//! Scopemap - dependency graph and structure maps for JS/TS projects

pub mod config;
pub mod error;
pub mod fs;
pub mod generate;
pub mod graph;
pub mod output;
pub mod path_utils;
pub mod structure;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{Config, GraphConfig, StructureConfig};
pub use error::{Error, Result};
pub use fs::{DirEntry, FileSystem, OsFileSystem};
pub use generate::{Document, generate_graph, generate_structure, write_document};
pub use graph::{
    Analysis, BuiltinSource, ForwardGraph, GraphReport, GraphSource, ImpactEntry, MadgeSource,
    ReverseGraph, Resolver, analyze, build_reverse, rank_impact,
};
pub use output::{Summary, eprint_summary, now_timestamp, print_summary};
pub use structure::{StructureNode, StructureWalker};
