//! The five pipeline stages
//!
//! Each stage is a free function taking the [`BootstrapEnv`](crate::env::BootstrapEnv)
//! and returning a [`StageOutcome`](crate::pipeline::StageOutcome); the
//! dispatcher in [`pipeline`](crate::pipeline) decides what happens next.

pub mod archive;
pub mod build;
pub mod patch;
pub mod prereq;
pub mod publish;

use std::path::Path;

/// True if `path` is a regular file with at least one execute bit set.
#[cfg(unix)]
pub(crate) fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}
