//! Shared testing harness for `angle-prompts` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const LOCALE_ENV_VARS: [&str; 4] = ["LC_ALL", "LC_CTYPE", "LANG", "LANGUAGE"];

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary with an English environment locale.
    pub(crate) fn cli(&self) -> Command {
        self.cli_with_locale("en_US.UTF-8")
    }

    /// Build a command for invoking the compiled binary with `LANG` set to `tag`.
    pub(crate) fn cli_with_locale(&self, tag: &str) -> Command {
        let mut cmd = Command::cargo_bin("angle-prompts").expect("Failed to locate binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.root.path());
        for name in LOCALE_ENV_VARS {
            cmd.env_remove(name);
        }
        cmd.env("LANG", tag).env_remove("RUST_LOG");
        cmd
    }

    /// Write `angle-prompts.toml` into the working directory.
    pub(crate) fn write_settings(&self, content: &str) {
        fs::write(self.work_dir.join("angle-prompts.toml"), content)
            .expect("Failed to write settings file");
    }

    /// Write `content` to `name` under the working directory and return its path.
    pub(crate) fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }
}
