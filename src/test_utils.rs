//! Test utilities for creating temporary JS/TS projects.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Create a new empty temporary project.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the project root.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Read a file relative to the project root.
    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.dir.path().join(path)).expect("Failed to read file")
    }

    /// Lay out a small Next.js style project with a shared utility module.
    pub fn sample() -> Self {
        let project = Self::new();
        project.add_file("package.json", "{ \"name\": \"sample\" }\n");
        project.add_file("lib/utils.ts", "export const cn = (...c: string[]) => c.join(' ');\n");
        project.add_file(
            "components/Button.tsx",
            "import { cn } from '@/lib/utils';\nexport function Button() { return null; }\n",
        );
        project.add_file(
            "app/page.tsx",
            "import { Button } from '../components/Button';\nimport { cn } from '@/lib/utils';\n",
        );
        project.add_file("app/layout.tsx", "import React from 'react';\nimport { cn } from '../lib/utils';\n");
        project
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}
