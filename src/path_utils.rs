//! Helpers for project-relative paths.
//!
//! Every path that flows through the analyzer is a `/`-separated string
//! relative to the project root (e.g. `components/Button.tsx`). The empty
//! string denotes the root itself. Keeping paths in this form makes graph keys
//! platform independent and lets the in-memory filesystem share the same
//! representation as the OS-backed one.

/// Join a relative path onto a base directory.
///
/// No normalization is performed; see [`normalize`].
pub fn join(base: &str, rel: &str) -> String {
    if base.is_empty() {
        rel.to_string()
    } else if rel.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), rel)
    }
}

/// Directory part of a relative path (`""` for top-level entries).
pub fn parent(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Last segment of a relative path.
pub fn file_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Extension of the last segment including the leading dot (`".tsx"`).
pub fn extension(path: &str) -> Option<&str> {
    let name = file_name(path);
    let idx = name.rfind('.')?;
    // ".env" style names have no extension
    if idx == 0 { None } else { Some(&name[idx..]) }
}

/// Lexically collapse `.` and `..` segments and duplicate separators.
///
/// Returns `None` if the path climbs above the project root.
pub fn normalize(path: &str) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop()?;
            }
            other => parts.push(other),
        }
    }
    Some(parts.join("/"))
}

/// Names starting with a dot are hidden.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
