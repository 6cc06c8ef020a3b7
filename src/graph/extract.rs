//! Import specifier extraction
//!
//! Finds `import <bindings> from '<specifier>'` statements with a regex and
//! keeps only project-local specifiers (relative paths and the root alias).

use std::sync::LazyLock;

use regex::Regex;

use crate::fs::FileSystem;

/// Bindings follow import clause syntax: optional `type`, then a default
/// binding, `* as name`, `{ ... }` or a default plus one of the other two.
/// Arbitrary text between `import` and `from` never matches.
static IMPORT_FROM: LazyLock<Regex> = LazyLock::new(|| {
    let ident = r"[A-Za-z_$][\w$]*";
    let namespace = format!(r"\*\s*as\s+{ident}");
    let named = r#"\{[^{}'"]*\}"#;
    let clause = format!(r"(?:{ident}(?:\s*,\s*(?:{namespace}|{named}))?|{namespace}|{named})");
    Regex::new(&format!(
        r#"\bimport\s+(?:type\s+)?{clause}\s*\bfrom\s*['"]([^'"]+)['"]"#
    ))
    .expect("IMPORT_FROM regex is invalid")
});

/// Extract local import specifiers from source text, in source order.
///
/// A specifier is local if it starts with `.` or with `root_alias`.
pub fn extract_specifiers(content: &str, root_alias: &str) -> Vec<String> {
    IMPORT_FROM
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|spec| is_local(spec, root_alias))
        .map(str::to_string)
        .collect()
}

/// Read a file and extract its local import specifiers.
///
/// Unreadable files yield no specifiers.
pub fn read_specifiers<F: FileSystem + ?Sized>(fs: &F, path: &str, root_alias: &str) -> Vec<String> {
    match fs.read_to_string(path) {
        Ok(content) => extract_specifiers(&content, root_alias),
        Err(e) => {
            log::debug!("cannot read '{}': {}", path, e);
            Vec::new()
        }
    }
}

fn is_local(specifier: &str, root_alias: &str) -> bool {
    specifier.starts_with('.') || (!root_alias.is_empty() && specifier.starts_with(root_alias))
}
