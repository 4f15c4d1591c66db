//! Common test utilities for moostrap CLI tests.
//!
//! Provides `TestEnv`: an isolated temp working directory plus helpers to
//! run the moostrap binary with toolchain stand-ins wired up through the
//! `MOOSTRAP_*` environment overrides.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub const TREE_NAME: &str = "MOO-1.8.1";
pub const ARCHIVE_NAME: &str = "LambdaMOO-1.8.1-FileIO.tar.gz";

/// Result of running the moostrap CLI
#[derive(Debug)]
pub struct RunResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl RunResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated working directory for one bootstrap scenario.
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("create temp working directory"),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Run moostrap in the working directory with extra env vars.
    pub fn run_with_env(&self, env_vars: &[(&str, &str)]) -> RunResult {
        let bin = env!("CARGO_BIN_EXE_moostrap");
        let mut cmd = Command::new(bin);
        cmd.current_dir(self.root.path());
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        let Output {
            status,
            stdout,
            stderr,
        } = cmd.output().expect("run moostrap");

        RunResult {
            success: status.success(),
            exit_code: status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&stdout).to_string(),
            stderr: String::from_utf8_lossy(&stderr).to_string(),
        }
    }

    /// Run with the client check satisfied by `sh` (present on any host the
    /// tests run on) plus any extra overrides.
    pub fn run(&self, extra: &[(&str, &str)]) -> RunResult {
        let mut env_vars = vec![("MOOSTRAP_CLIENT", "sh")];
        env_vars.extend_from_slice(extra);
        self.run_with_env(&env_vars)
    }

    /// Create an empty extracted source tree.
    pub fn make_tree(&self) {
        fs::create_dir_all(self.path(TREE_NAME)).unwrap();
    }

    /// Drop a FileIO header with the shipped placeholder into the tree.
    pub fn write_header(&self) {
        fs::write(
            self.path(TREE_NAME).join("fileio.h"),
            "/* FileIO configuration */\n#define FILE_SUBDIR \"files/\"\n",
        )
        .unwrap();
    }

    /// Write an executable shell script at `relative`.
    pub fn write_script(&self, relative: &str, body: &str) -> PathBuf {
        let path = self.path(relative);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Make stand-in that ignores `clean` and otherwise produces the
    /// executable the publish stage looks for.
    pub fn fake_make(&self) -> PathBuf {
        self.write_script(
            "fake-make",
            "[ \"$1\" = clean ] && exit 0\nprintf '#!/bin/sh\\nexit 0\\n' > moo\nchmod +x moo",
        )
    }

    /// List of entries currently in the working directory.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Assert the file at `path` is a symlink pointing at `target`.
pub fn assert_link(path: &Path, target: &str) {
    let resolved = fs::read_link(path)
        .unwrap_or_else(|e| panic!("{} should be a symlink: {e}", path.display()));
    assert_eq!(resolved, PathBuf::from(target));
}
