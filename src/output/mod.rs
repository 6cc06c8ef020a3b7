//! Document rendering and console output
//!
//! - `graph_markdown` - the dependency graph document
//! - `structure_markdown` - the project structure document
//! - `tree` - `tree`-style rendering of the structure walk
//! - `summary` - colored console summary
//! - `utils` - timestamp and number formatting

mod graph_markdown;
mod structure_markdown;
mod summary;
mod tree;
mod utils;

pub use graph_markdown::render_graph_markdown;
pub use structure_markdown::render_structure_markdown;
pub use summary::{Summary, eprint_summary, print_summary, write_summary};
pub use tree::render_tree;
pub use utils::{format_average, format_number, format_timestamp, now_timestamp};
