//! Build driver
//!
//! Standard two-phase protocol in the tree root: configure, then a clean
//! compile. Each tool is a blocking external process; the exit status is the
//! only signal. Nothing is cleaned up on failure - the tree and the patched
//! header stay on disk so the next run resumes here.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::env::BootstrapEnv;
use crate::error::{BootstrapError, BootstrapResult};
use crate::pipeline::StageOutcome;

pub fn compile(env: &BootstrapEnv) -> BootstrapResult<StageOutcome> {
    let tree = env.tree_path();
    run_tool(env.configure_cmd(), &[], &tree)?;
    run_tool(env.make_cmd(), &["clean"], &tree)?;
    run_tool(env.make_cmd(), &[], &tree)?;
    Ok(StageOutcome::Completed)
}

fn run_tool(command: &str, args: &[&str], cwd: &Path) -> BootstrapResult<()> {
    // "./configure" must resolve against the tree, not against wherever the
    // orchestrator happens to run from.
    let program = match command.strip_prefix("./") {
        Some(rest) => cwd.join(rest),
        None => PathBuf::from(command),
    };

    let shown = if args.is_empty() {
        command.to_string()
    } else {
        format!("{} {}", command, args.join(" "))
    };

    let status = Command::new(&program)
        .args(args)
        .current_dir(cwd)
        .status()
        .map_err(|_| BootstrapError::BuildToolFailure {
            command: shown.clone(),
            code: None,
        })?;

    if !status.success() {
        return Err(BootstrapError::BuildToolFailure {
            command: shown,
            code: status.code(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::TREE_NAME;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::tempdir;

    fn setup(root: &Path) -> BootstrapEnv {
        fs::create_dir_all(root.join(TREE_NAME)).unwrap();
        BootstrapEnv::new(root)
    }

    fn write_script(path: &Path, body: &str) {
        fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_compile_succeeds_with_working_toolchain() {
        let dir = tempdir().unwrap();
        let env = setup(dir.path())
            .with_configure_cmd("true")
            .with_make_cmd("true");
        assert!(matches!(compile(&env).unwrap(), StageOutcome::Completed));
    }

    #[test]
    fn test_configure_script_runs_from_the_tree() {
        let dir = tempdir().unwrap();
        let env = setup(dir.path()).with_make_cmd("true");
        // the default "./configure" is resolved inside the tree
        write_script(&env.tree_path().join("configure"), "touch configured");
        assert!(matches!(compile(&env).unwrap(), StageOutcome::Completed));
        assert!(env.tree_path().join("configured").is_file());
    }

    #[test]
    fn test_failing_make_propagates_its_exit_code() {
        let dir = tempdir().unwrap();
        let env = setup(dir.path()).with_configure_cmd("true");
        let fake_make = dir.path().join("failing-make");
        write_script(&fake_make, "exit 3");
        let env = env.with_make_cmd(fake_make.to_string_lossy());

        let err = compile(&env).unwrap_err();
        match err {
            BootstrapError::BuildToolFailure { code, .. } => assert_eq!(code, Some(3)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_tool_is_a_build_failure() {
        let dir = tempdir().unwrap();
        let env = setup(dir.path())
            .with_configure_cmd("moostrap-no-such-configure")
            .with_make_cmd("true");
        let err = compile(&env).unwrap_err();
        assert!(matches!(
            err,
            BootstrapError::BuildToolFailure { code: None, .. }
        ));
    }

    #[test]
    fn test_make_is_invoked_clean_first() {
        let dir = tempdir().unwrap();
        let env = setup(dir.path()).with_configure_cmd("true");
        let fake_make = dir.path().join("logging-make");
        write_script(&fake_make, "echo \"$@\" >> invocations");
        let env = env.with_make_cmd(fake_make.to_string_lossy());

        compile(&env).unwrap();
        let log = fs::read_to_string(env.tree_path().join("invocations")).unwrap();
        let lines: Vec<_> = log.lines().collect();
        assert_eq!(lines, vec!["clean", ""]);
    }
}
