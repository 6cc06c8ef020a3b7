//! Plain-text tree rendering for the structure map

use crate::structure::StructureNode;

/// Render a forest as `tree`-style lines.
///
/// Directories get a trailing `/`. The connector is chosen per entry, so the
/// last child of every directory closes its branch with `└── `.
pub fn render_tree(nodes: &[StructureNode]) -> Vec<String> {
    let mut lines = Vec::new();
    render_nodes(nodes, "", &mut lines);
    lines
}

fn render_nodes(nodes: &[StructureNode], prefix: &str, lines: &mut Vec<String>) {
    for (i, node) in nodes.iter().enumerate() {
        let is_last = i == nodes.len() - 1;
        let connector = if is_last { "└── " } else { "├── " };

        let mut line = String::with_capacity(prefix.len() + node.name().len() + 8);
        line.push_str(prefix);
        line.push_str(connector);
        line.push_str(node.name());
        if node.is_dir() {
            line.push('/');
        }
        lines.push(line);

        if let StructureNode::Dir { children, .. } = node {
            let child_prefix = child_prefix(prefix, is_last);
            render_nodes(children, &child_prefix, lines);
        }
    }
}

/// Calculate the prefix for child entries
fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", current_prefix)
    } else {
        format!("{}│   ", current_prefix)
    }
}
