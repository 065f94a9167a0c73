//! Shared testing utilities for argogen CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `argogen` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("argogen").expect("Failed to locate argogen binary");
        cmd.current_dir(self.work_dir());
        cmd
    }

    /// Write a values file into the working directory and return its path.
    pub fn write_values(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).expect("Failed to write values file");
        path
    }

    /// Capture stdout of a successful CLI invocation.
    pub fn render_stdout(&self, args: &[&str]) -> String {
        let assert = self.cli().args(args).assert().success();
        String::from_utf8(assert.get_output().stdout.clone()).expect("stdout should be UTF-8")
    }
}
