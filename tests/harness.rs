//! Test harness for scopemap integration tests

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

pub use scopemap::test_utils::TestProject;

pub const GRAPH_DOC: &str = "_DOCS/06_DEPENDENCY_GRAPH.md";
pub const STRUCTURE_DOC: &str = "_DOCS/00_STRUCTURE.md";

/// Run the binary in `dir`, returning (stdout, stderr, success).
pub fn run_scopemap(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_scopemap");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("FORCE_COLOR")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run scopemap");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let project = TestProject::new();
        assert!(project.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let project = TestProject::new();
        let file_path = project.add_file("lib/utils.ts", "export const x = 1;");
        assert!(file_path.exists());
    }

    #[test]
    fn test_harness_sample_project() {
        let project = TestProject::sample();
        assert!(project.path().join("app/page.tsx").is_file());
    }
}
