//! Configuration patch
//!
//! Binds the FileIO extension's compile-time data directory to
//! `<cwd>/files/`. The extension is optional, so everything here is
//! non-fatal: a missing header or an unrecognized one produces a warning and
//! the build goes ahead unpatched.
//!
//! Four cases, decided in order:
//! 1. header still carries the shipped `"files/"` placeholder - substitute it
//! 2. header already names the current data directory - no-op
//! 3. header names the data directory recorded by a previous run (the
//!    working directory moved) - warn and re-patch
//! 4. anything else - warn and leave the header alone

use std::fs;
use std::path::Path;

use crate::env::{BootstrapEnv, DATA_DIR_PLACEHOLDER};
use crate::error::BootstrapResult;
use crate::pipeline::StageOutcome;
use crate::state::ProvisionState;

pub fn apply(env: &BootstrapEnv, state: &mut ProvisionState) -> BootstrapResult<StageOutcome> {
    let header = env.header_path();
    if !header.is_file() {
        return Ok(StageOutcome::Skipped(format!(
            "extension header {} not found; building without the FileIO patch",
            header.display()
        )));
    }

    let data_dir = env.data_dir();
    // The path is written into C source, so a working directory that is not
    // valid UTF-8 cannot be patched in faithfully; skip rather than write a
    // lossy rendering of it.
    let Some(target) = quoted_dir(&data_dir) else {
        return Ok(StageOutcome::Skipped(format!(
            "working directory {} is not valid UTF-8; header left untouched",
            data_dir.display()
        )));
    };
    let placeholder = format!("\"{DATA_DIR_PLACEHOLDER}\"");
    let previous = state.data_dir.as_deref().and_then(quoted_dir);

    let content = fs::read_to_string(&header)?;
    let outcome = if content.contains(&placeholder) {
        fs::write(&header, content.replace(&placeholder, &target))?;
        StageOutcome::Completed
    } else if content.contains(&target) {
        StageOutcome::Unchanged("header already points at the runtime data directory")
    } else if let Some(prev) = previous.filter(|p| *p != target && content.contains(p.as_str())) {
        eprintln!(
            "⚠ header was patched for {} previously; re-patching for {}",
            prev,
            target
        );
        fs::write(&header, content.replace(&prev, &target))?;
        StageOutcome::Completed
    } else {
        return Ok(StageOutcome::Skipped(format!(
            "placeholder \"{DATA_DIR_PLACEHOLDER}\" not found in {}; header left untouched",
            header.display()
        )));
    };

    // The extension reads and writes under files/Users at serve time.
    fs::create_dir_all(env.users_dir())?;
    state.data_dir = Some(data_dir);
    Ok(outcome)
}

/// Directory path as it appears in the header: quoted, trailing slash.
/// `None` if the path is not representable as UTF-8.
fn quoted_dir(dir: &Path) -> Option<String> {
    dir.to_str().map(|s| format!("\"{s}/\""))
}
