//!
//! # Test Common Utilities
//!
//! Helpers for driving the `fileshell` binary over stdin in an isolated
//! working directory.
//!
//
// // # 测试通用工具
// //
// // 在隔离的工作目录中通过 stdin 驱动 `fileshell` 可执行文件。
// //
#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::assert::Assert;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// Represents the context for a single test.
///
/// The temporary directory is removed when the `TestContext` goes out of scope.
pub struct TestContext {
    /// Held for its Drop behavior.
    pub _temp_dir: TempDir,
    /// The working directory handed to `--dir`.
    pub work_dir: PathBuf,
}

impl TestContext {
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = tempdir()?;
        let work_dir = temp_dir.path().join("work");
        fs::create_dir(&work_dir)?;
        Ok(TestContext {
            _temp_dir: temp_dir,
            work_dir,
        })
    }

    /// A command for the binary pointed at the working directory, logging off.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_fileshell"));
        cmd.arg("--dir").arg(&self.work_dir).arg("--quiet");
        cmd
    }

    /// Pipes `lines` into the REPL followed by `exit`.
    pub fn run(&self, lines: &[&str]) -> Assert {
        let mut input = lines.join("\n");
        input.push_str("\nexit\n");
        self.command().write_stdin(input).assert()
    }

    /// Creates a file in the working directory.
    pub fn create_file(&self, name: &str, content: &str) -> anyhow::Result<PathBuf> {
        let path = self.work_dir.join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn read_file(&self, name: &str) -> anyhow::Result<String> {
        Ok(fs::read_to_string(self.work_dir.join(name))?)
    }

    /// Returns the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self._temp_dir.path()
    }
}
