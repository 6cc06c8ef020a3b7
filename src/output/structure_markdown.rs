//! Project structure document

use crate::config::StructureConfig;

/// Render the structure map document around pre-rendered tree lines.
pub fn render_structure_markdown(
    project_name: &str,
    tree_lines: &[String],
    config: &StructureConfig,
    timestamp: &str,
) -> String {
    let mut out = String::new();

    out.push_str("# Project Structure Map\n\n");
    out.push_str("**AUTO-GENERATED** by `scopemap structure`  \n");
    out.push_str("**DO NOT EDIT MANUALLY** - This file is regenerated before each planning session.  \n");
    out.push_str(&format!("**Last Updated:** {}\n\n", timestamp));
    out.push_str("---\n\n");

    out.push_str("## Purpose\n");
    out.push_str("This file provides the current valid file tree to prevent AI hallucination of paths.\n");
    out.push_str("It is automatically generated from the actual directory structure.\n\n");

    out.push_str("## Directory Structure\n\n");
    out.push_str("```\n");
    out.push_str(project_name);
    out.push_str("/\n");
    for line in tree_lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("```\n\n");
    out.push_str("---\n\n");

    out.push_str("## Maintenance\n\n");
    out.push_str("- **Auto-generated:** Run `scopemap structure`\n");
    out.push_str("- **Pre-planning hook:** This should run automatically before Planner agent execution\n");
    out.push_str(&format!("- **Ignored items:** {}\n", config.ignore.join(", ")));
    out.push_str(&format!(
        "- **Scanned directories:** {}\n\n",
        config.scan_dirs.join(", ")
    ));

    out.push_str("## Integration with Dual-Brain System\n\n");
    out.push_str("The Planner agent should always read this file first to ensure accurate path references.\n");
    out.push_str("This eliminates the need for manual updates and prevents outdated structure information.\n");

    out
}
