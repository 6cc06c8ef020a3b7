//! Edge case and error handling tests for scopemap

mod harness;

use assert_cmd::Command;
use harness::{GRAPH_DOC, STRUCTURE_DOC, TestProject, run_scopemap};
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};
use std::path::Path;

fn scopemap(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("scopemap").expect("binary built");
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Install a fake `madge` executable and return a PATH that finds it first.
fn fake_madge(project: &TestProject, script: &str) -> String {
    let bin = project.add_dir("fake-bin");
    let madge = bin.join("madge");
    fs::write(&madge, script).expect("Failed to write fake madge");
    fs::set_permissions(&madge, fs::Permissions::from_mode(0o755)).expect("Failed to chmod");
    let path = std::env::var("PATH").unwrap_or_default();
    format!("{}:{}", bin.display(), path)
}

// ============================================================================
// Empty and degenerate projects
// ============================================================================

#[test]
fn test_empty_project() {
    let project = TestProject::new();

    let (_stdout, stderr, success) = run_scopemap(project.path(), &["--builtin"]);
    assert!(success, "empty project should succeed: {}", stderr);

    let graph = project.read(GRAPH_DOC);
    assert!(graph.contains("- **Total Files Analyzed**: 0\n"));
    assert!(graph.contains("- **Total Dependencies**: 0\n"));
    assert!(graph.contains("- **Average Dependencies per File**: 0\n"));
    assert!(graph.contains("*No high-impact files detected*"));

    // Only the graph document written just before is listed
    let structure = project.read(STRUCTURE_DOC);
    assert!(
        structure.contains("/\n└── _DOCS/\n    └── 06_DEPENDENCY_GRAPH.md\n```\n"),
        "{}",
        structure
    );
}

#[test]
fn test_invalid_utf8_file_is_skipped() {
    let project = TestProject::sample();
    let bad = project.path().join("lib/broken.ts");
    fs::write(&bad, [0xff, 0xfe, 0x00, 0x69]).unwrap();

    let (_stdout, stderr, success) = run_scopemap(project.path(), &["graph", "--builtin"]);
    assert!(success, "unreadable files are not fatal: {}", stderr);
    assert!(project.read(GRAPH_DOC).contains("- **Total Files Analyzed**: 3\n"));
}

#[test]
fn test_unresolvable_imports_dropped() {
    let project = TestProject::new();
    project.add_file(
        "lib/a.ts",
        "import { x } from './missing';\nimport { y } from '@/nowhere/else';\nimport { z } from '../../outside';\n",
    );

    let (_stdout, stderr, success) = run_scopemap(project.path(), &["graph", "--builtin"]);
    assert!(success, "{}", stderr);
    assert!(project.read(GRAPH_DOC).contains("- **Total Files Analyzed**: 0\n"));
}

#[test]
fn test_duplicate_imports_counted_twice() {
    let project = TestProject::new();
    project.add_file("lib/b.ts", "export const b = 1;\nexport type B = number;\n");
    project.add_file(
        "lib/a.ts",
        "import { b } from './b';\nimport type { B } from './b';\n",
    );

    let (_stdout, stderr, success) = run_scopemap(project.path(), &["graph", "--builtin"]);
    assert!(success, "{}", stderr);
    let doc = project.read(GRAPH_DOC);
    assert!(doc.contains("- **Total Dependencies**: 2\n"), "{}", doc);
    assert!(doc.contains("- **Imported By**: 2 file(s)\n"), "{}", doc);
}

#[test]
fn test_directory_index_resolution() {
    let project = TestProject::new();
    project.add_file("components/ui/index.tsx", "export const Ui = 1;\n");
    project.add_file("app/page.tsx", "import { Ui } from '@/components/ui';\n");

    let (_stdout, stderr, success) = run_scopemap(project.path(), &["graph", "--builtin"]);
    assert!(success, "{}", stderr);
    assert!(project.read(GRAPH_DOC).contains("### `components/ui/index.tsx`"));
}

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlinked_directory_not_followed() {
    let project = TestProject::new();
    project.add_file("lib/real/a.ts", "import { b } from './b';\n");
    project.add_file("lib/real/b.ts", "export const b = 1;\n");
    symlink(project.path().join("lib/real"), project.path().join("lib/link"))
        .expect("Failed to create symlink");

    let (_stdout, stderr, success) = run_scopemap(project.path(), &["--builtin"]);
    assert!(success, "{}", stderr);
    let graph = project.read(GRAPH_DOC);
    assert!(graph.contains("- **Total Files Analyzed**: 1\n"), "{}", graph);
    assert!(!graph.contains("lib/link"));
    assert!(!project.read(STRUCTURE_DOC).contains("link"));
}

#[test]
fn test_symlink_loop_terminates() {
    let project = TestProject::new();
    project.add_file("lib/a.ts", "");
    symlink(project.path().join("lib"), project.path().join("lib/loop"))
        .expect("Failed to create symlink");

    scopemap(project.path())
        .args(["--builtin"])
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success();
}

// ============================================================================
// External analyzer
// ============================================================================

#[test]
fn test_madge_output_used_when_available() {
    let project = TestProject::new();
    project.add_file("lib/x.ts", "");
    let path = fake_madge(
        &project,
        "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then echo 6.1.0; exit 0; fi\necho '{\"lib/x.ts\": [\"lib/y.ts\"], \"lib/y.ts\": []}'\n",
    );

    scopemap(project.path())
        .args(["graph"])
        .env("PATH", path)
        .assert()
        .success()
        .stdout(predicate::str::contains("madge"));

    let doc = project.read(GRAPH_DOC);
    assert!(doc.contains("- **Analyzer Used**: madge\n"), "{}", doc);
    assert!(doc.contains("- **Total Files Analyzed**: 2\n"), "{}", doc);
    assert!(doc.contains("### `lib/y.ts`"), "{}", doc);
}

#[test]
fn test_madge_failure_falls_back_to_builtin() {
    let project = TestProject::sample();
    let path = fake_madge(
        &project,
        "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then echo 6.1.0; exit 0; fi\necho boom >&2\nexit 2\n",
    );

    scopemap(project.path())
        .args(["graph"])
        .env("PATH", path)
        .assert()
        .success()
        .stderr(predicate::str::contains("trying next analyzer"));

    let doc = project.read(GRAPH_DOC);
    assert!(doc.contains("- **Analyzer Used**: built-in\n"), "{}", doc);
    assert!(doc.contains("- **Total Files Analyzed**: 3\n"), "{}", doc);
}

#[test]
fn test_madge_malformed_output_falls_back() {
    let project = TestProject::sample();
    let path = fake_madge(
        &project,
        "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then exit 0; fi\necho 'not json'\n",
    );

    scopemap(project.path())
        .args(["graph"])
        .env("PATH", path)
        .assert()
        .success();
    assert!(project.read(GRAPH_DOC).contains("- **Analyzer Used**: built-in\n"));
}

#[test]
fn test_builtin_flag_skips_madge() {
    let project = TestProject::sample();
    let path = fake_madge(
        &project,
        "#!/bin/sh\necho '{\"should/not\": [\"appear.ts\"]}'\n",
    );

    scopemap(project.path())
        .args(["graph", "--builtin"])
        .env("PATH", path)
        .assert()
        .success();
    let doc = project.read(GRAPH_DOC);
    assert!(!doc.contains("should/not"));
    assert!(doc.contains("- **Analyzer Used**: built-in\n"));
}

// ============================================================================
// Fatal errors
// ============================================================================

#[test]
fn test_invalid_config_exits_with_error() {
    let project = TestProject::sample();
    project.add_file("scopemap.toml", "[graph\nsource_dirs = 3\n");

    scopemap(project.path())
        .args(["graph", "--builtin"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("scopemap: invalid config"));
}

#[test]
fn test_unknown_config_key_exits_with_error() {
    let project = TestProject::sample();
    project.add_file("scopemap.toml", "[graph]\nsource_directories = [\"src\"]\n");

    scopemap(project.path())
        .args(["graph", "--builtin"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("source_directories"));
}

#[test]
fn test_unwritable_output_exits_with_error() {
    let project = TestProject::sample();
    // A file where the output directory should be
    project.add_file("_DOCS", "");

    scopemap(project.path())
        .args(["graph", "--builtin"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("scopemap: cannot create directory"));
}

#[test]
fn test_output_without_subcommand_is_rejected() {
    let project = TestProject::sample();

    scopemap(project.path())
        .args(["-o", "out.md"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("requires a subcommand"));
    assert!(!project.path().join("out.md").exists());
}

#[test]
fn test_unknown_flag_exits_with_error() {
    let project = TestProject::new();

    scopemap(project.path())
        .args(["--no-such-flag"])
        .assert()
        .code(1);
}

#[test]
fn test_help_succeeds() {
    let project = TestProject::new();

    scopemap(project.path())
        .args(["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("structure"));
}
