//! Source resolution
//!
//! An already-extracted tree doubles as the "already bootstrapped" marker:
//! once `MOO-1.8.1/` exists the archive is never touched again, so a re-run
//! after a failed build resumes instead of clobbering the tree.

use std::process::Command;

use crate::env::{BootstrapEnv, ARCHIVE_NAME};
use crate::error::{BootstrapError, BootstrapResult};
use crate::pipeline::StageOutcome;

pub fn resolve(env: &BootstrapEnv) -> BootstrapResult<StageOutcome> {
    let tree = env.tree_path();
    if tree.is_dir() {
        return Ok(StageOutcome::Unchanged("source tree already extracted"));
    }

    let archive = env.archive_path();
    if !archive.is_file() {
        return Err(BootstrapError::MissingSourceArtifact { archive, tree });
    }

    // Preserves the archive's internal paths; the archive itself is kept.
    let command = format!("tar xzf {ARCHIVE_NAME}");
    let status = Command::new("tar")
        .args(["xzf", ARCHIVE_NAME])
        .current_dir(env.root())
        .status()
        .map_err(|_| BootstrapError::BuildToolFailure {
            command: command.clone(),
            code: None,
        })?;
    if !status.success() {
        return Err(BootstrapError::BuildToolFailure {
            command,
            code: status.code(),
        });
    }

    if !tree.is_dir() {
        return Err(BootstrapError::ExtractionMismatch {
            archive,
            expected: tree,
        });
    }
    Ok(StageOutcome::Completed)
}
