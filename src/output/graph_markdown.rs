//! Dependency graph document

use crate::config::GraphConfig;
use crate::error::Result;
use crate::graph::{GraphReport, ImpactEntry};

use super::utils::format_average;

/// Every ranked file is reported at this level.
const IMPACT_LEVEL: &str = "HIGH";

/// Render the dependency graph document.
///
/// `analyzer` names the graph source that produced `report.forward`;
/// `timestamp` is shown verbatim as the last update time.
pub fn render_graph_markdown(
    report: &GraphReport,
    analyzer: &str,
    config: &GraphConfig,
    timestamp: &str,
) -> Result<String> {
    let stats = report.stats();
    let forward_json = serde_json::to_string_pretty(&report.forward)?;
    let reverse_json = serde_json::to_string_pretty(&report.reverse)?;

    let mut out = String::new();

    out.push_str("# Dependency Graph\n\n");
    out.push_str("**AUTO-GENERATED** by `scopemap graph`\n");
    out.push_str("**DO NOT EDIT MANUALLY** - Regenerate with: `scopemap graph`\n");
    out.push_str(&format!("**Last Updated:** {}\n\n", timestamp));
    out.push_str("---\n\n");

    out.push_str("## Purpose\n\n");
    out.push_str("This file maps import/export relationships across the codebase.\n");
    out.push_str("**Critical for Planner**: Before modifying a file, check if it's imported by others.\n");
    out.push_str("If a file has many importers, changes may require updating Reference Scope or Context Scope.\n\n");
    out.push_str("---\n\n");

    out.push_str("## Statistics\n\n");
    out.push_str(&format!("- **Total Files Analyzed**: {}\n", stats.total_files));
    out.push_str(&format!("- **Total Dependencies**: {}\n", stats.total_dependencies));
    out.push_str(&format!(
        "- **Average Dependencies per File**: {}\n\n",
        format_average(stats.average_dependencies, stats.total_files)
    ));
    out.push_str("---\n\n");

    out.push_str(&format!("## High-Impact Files (Top {})\n\n", config.ranking_limit));
    out.push_str("These files are imported by many others. Modifying them requires careful impact analysis.\n\n");
    if report.ranking.is_empty() {
        out.push_str("*No high-impact files detected*\n");
    } else {
        for entry in &report.ranking {
            render_impact_entry(&mut out, entry);
        }
    }
    out.push('\n');
    out.push_str("---\n\n");

    out.push_str("## Full Dependency Map\n\n");
    render_details(
        &mut out,
        "Click to expand complete dependency graph (JSON format)",
        &forward_json,
    );
    out.push_str("---\n\n");

    out.push_str("## Reverse Dependency Map\n\n");
    render_details(
        &mut out,
        "Click to expand reverse dependencies (which files import what)",
        &reverse_json,
    );
    out.push_str("---\n\n");

    out.push_str(PLANNER_GUIDE);
    out.push_str("---\n\n");

    out.push_str("## Maintenance\n\n");
    out.push_str("- **Update**: Run `scopemap graph` before planning sessions\n");
    out.push_str("- **Tool**: Uses madge (install: `npm install -g madge`) or built-in analyzer\n");
    out.push_str(&format!("- **Analyzer Used**: {}\n", analyzer));
    out.push_str(&format!(
        "- **Directories Analyzed**: {}\n",
        config.source_dirs.join(", ")
    ));
    out.push_str(&format!("- **File Types**: {}\n\n", config.extensions.join(", ")));
    out.push_str("---\n\n");

    out.push_str(EVALUATOR_NOTES);

    Ok(out)
}

fn render_impact_entry(out: &mut String, entry: &ImpactEntry) {
    out.push_str(&format!("\n### `{}`\n", entry.file));
    out.push_str(&format!("- **Impact Level**: {}\n", IMPACT_LEVEL));
    out.push_str(&format!("- **Imported By**: {} file(s)\n", entry.importer_count));
    out.push_str("- **Key Importers**:\n");
    for importer in &entry.importers {
        out.push_str(&format!("  - `{}`\n", importer));
    }
    if entry.has_more {
        out.push_str(&format!(
            "  - *...and {} more*\n",
            entry.importer_count - entry.importers.len()
        ));
    }
}

fn render_details(out: &mut String, summary: &str, json: &str) {
    out.push_str("<details>\n");
    out.push_str(&format!("<summary>{}</summary>\n\n", summary));
    out.push_str("```json\n");
    out.push_str(json);
    out.push_str("\n```\n\n");
    out.push_str("</details>\n\n");
}

const PLANNER_GUIDE: &str = r#"## How Planner Should Use This

### Before Creating Context Scope:

1. **Read this file** to understand the file's position in the dependency tree
2. **Check "High-Impact Files"** section first
3. **If modifying a high-impact file**:
   - Add key importers to **Reference Scope** (read-only)
   - OR add to **Context Scope** if they also need changes
   - Document potential side-effects in instruction

### Example Decision Flow:

```
Task: Modify lib/utils/validation.ts

Step 1: Check 06_DEPENDENCY_GRAPH.md
Step 2: Find validation.ts is imported by 12 files
Step 3: Identify top 3 importers:
  - app/auth/login/page.tsx
  - components/forms/UserForm.tsx
  - lib/actions/user-actions.ts

Step 4: Add to _INSTRUCTION.md:
  Context Scope:
    - lib/utils/validation.ts

  Reference Scope:
    - app/auth/login/page.tsx (uses validateEmail)
    - components/forms/UserForm.tsx (uses validatePassword)
```

"#;

const EVALUATOR_NOTES: &str = r#"## Integration with Evaluator

The Evaluator should verify:
- If a Context Scope file is high-impact, did the Coder test affected importers?
- Are breaking changes properly documented in 03_SERVER_ACTIONS.md?
"#;
