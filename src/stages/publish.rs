//! Artifact publish
//!
//! The build tool exiting zero is not trusted on its own; the executable has
//! to actually be there. Publishing is a relative symlink in the working
//! directory so callers never need to know the tree layout, and it is
//! recreated on every successful run.

use std::fs;
use std::path::PathBuf;

use crate::env::{BootstrapEnv, EXECUTABLE, TREE_NAME};
use crate::error::{BootstrapError, BootstrapResult};
use crate::pipeline::StageOutcome;
use crate::stages::is_executable;

pub fn publish(env: &BootstrapEnv) -> BootstrapResult<StageOutcome> {
    let executable = env.built_executable();
    if !is_executable(&executable) {
        return Err(BootstrapError::ArtifactMissing { path: executable });
    }

    let link = env.link_path();
    if fs::symlink_metadata(&link).is_ok() {
        fs::remove_file(&link)?;
    }
    std::os::unix::fs::symlink(link_target(), &link)?;
    Ok(StageOutcome::Completed)
}

/// Link target relative to the working directory.
pub fn link_target() -> PathBuf {
    PathBuf::from(TREE_NAME).join(EXECUTABLE)
}
