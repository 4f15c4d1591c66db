//! Prerequisite check
//!
//! The served world is reached over telnet, so the client has to exist before
//! anything else is worth doing. This stage touches nothing on disk.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::env::BootstrapEnv;
use crate::error::{BootstrapError, BootstrapResult};
use crate::pipeline::StageOutcome;
use crate::stages::is_executable;

pub fn check(env: &BootstrapEnv) -> BootstrapResult<StageOutcome> {
    match find_in_path(env.client_cmd(), std::env::var_os("PATH")) {
        Some(_) => Ok(StageOutcome::Completed),
        None => Err(BootstrapError::MissingPrerequisite {
            command: env.client_cmd().to_string(),
        }),
    }
}

/// Resolve a command the way the shell would: names containing a path
/// separator are checked directly, bare names are searched on `path_var`.
pub(crate) fn find_in_path(command: &str, path_var: Option<OsString>) -> Option<PathBuf> {
    let candidate = Path::new(command);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    for dir in std::env::split_paths(path_var.as_ref()?) {
        let full = dir.join(command);
        if is_executable(&full) {
            return Some(full);
        }
    }
    None
}
