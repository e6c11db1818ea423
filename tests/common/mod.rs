//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use version_sync::VersionPaths;

/// A package.json in the shape npm writes it.
pub fn package_json(version: &str) -> String {
    format!(
        r#"{{
  "name": "git-local-sweep",
  "version": "{version}",
  "description": "Delete local branches already merged upstream",
  "bin": {{
    "git-local-sweep": "git-local-sweep"
  }},
  "files": [
    "git-local-sweep"
  ],
  "license": "MIT"
}}
"#
    )
}

/// A git-local-sweep script carrying the given version.
pub fn sweep_script(version: &str) -> String {
    format!(
        r#"#!/usr/bin/env python3
"""Delete local branches that are already merged."""

import subprocess
import sys

VERSION = "{version}"


def main():
    if "--version" in sys.argv:
        print(VERSION)
        return
    subprocess.run(["git", "branch", "--merged"], check=True)


if __name__ == "__main__":
    main()
"#
    )
}

/// A repository root with a manifest and a script in a temp directory.
pub struct TestProject {
    pub dir: tempfile::TempDir,
}

impl TestProject {
    /// Create a project with both files at the given versions.
    pub fn new(manifest_version: &str, script_version: &str) -> Self {
        let project = Self::empty();
        project.write_manifest(&package_json(manifest_version));
        project.write_script(&sweep_script(script_version));
        project
    }

    /// Create a project with no files.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn paths(&self) -> VersionPaths {
        VersionPaths::in_root(self.root())
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.paths().manifest
    }

    pub fn script_path(&self) -> PathBuf {
        self.paths().script
    }

    pub fn write_manifest(&self, content: &str) {
        std::fs::write(self.manifest_path(), content).expect("Failed to write manifest");
    }

    pub fn write_script(&self, content: &str) {
        std::fs::write(self.script_path(), content).expect("Failed to write script");
    }

    pub fn read_manifest(&self) -> String {
        std::fs::read_to_string(self.manifest_path()).expect("Failed to read manifest")
    }

    pub fn read_script(&self) -> String {
        std::fs::read_to_string(self.script_path()).expect("Failed to read script")
    }
}

/// Run the bump-version binary against a project root.
pub fn bump_version(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bump-version"))
        .args(args)
        .arg("--root")
        .arg(root)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run bump-version")
}

/// Run the check-version-sync binary against a project root.
pub fn check_version_sync(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_check-version-sync"))
        .args(args)
        .arg("--root")
        .arg(root)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run check-version-sync")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
