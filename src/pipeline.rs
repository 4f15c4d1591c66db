//! Linear stage dispatcher
//!
//! The five stages run in a fixed order with a fail-fast gate after each:
//! the first error aborts the run and whatever is already on disk stays
//! there for the next attempt. Stage outcomes are recorded in the
//! provisioning state file after every stage so a dead run can be diagnosed
//! without guesswork.

use std::path::PathBuf;

use crate::env::BootstrapEnv;
use crate::error::BootstrapResult;
use crate::stages;
use crate::state::{ProvisionState, StageStatus};

/// The pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Prerequisites,
    ResolveSource,
    PatchConfig,
    Build,
    Publish,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Prerequisites,
        Stage::ResolveSource,
        Stage::PatchConfig,
        Stage::Build,
        Stage::Publish,
    ];

    /// Stable name used in the state file and in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Prerequisites => "prerequisite-check",
            Stage::ResolveSource => "resolve-source",
            Stage::PatchConfig => "patch-config",
            Stage::Build => "build",
            Stage::Publish => "publish",
        }
    }
}

/// What a stage did, as seen by the dispatcher.
#[derive(Debug)]
pub enum StageOutcome {
    /// Stage ran and changed something
    Completed,
    /// Stage had nothing to do; the environment already satisfies it
    Unchanged(&'static str),
    /// Stage could not apply and was skipped with a warning (non-fatal)
    Skipped(String),
}

/// Result of a full successful run.
#[derive(Debug)]
pub struct PipelineReport {
    /// The published entry point (`./moo`)
    pub entry_point: PathBuf,
    /// What the link resolves to, relative to the working directory
    pub link_target: PathBuf,
}

/// Run all five stages in order. The first error aborts the run; partial
/// state is left in place for a retry.
pub fn run_pipeline(env: &BootstrapEnv, verbose: bool) -> BootstrapResult<PipelineReport> {
    let mut state = ProvisionState::load(env.root());

    for stage in Stage::ALL {
        if verbose {
            println!("-> {}", stage.name());
        }

        let outcome = run_stage(stage, env, &mut state)?;
        let status = match outcome {
            StageOutcome::Completed => StageStatus::Completed,
            StageOutcome::Unchanged(reason) => {
                if verbose {
                    println!("   {reason}");
                }
                StageStatus::Completed
            }
            StageOutcome::Skipped(warning) => {
                eprintln!("⚠ {warning}");
                StageStatus::Skipped
            }
        };

        state.record(stage.name(), status);
        // The record is advisory; an unwritable state file must not fail
        // an otherwise healthy run.
        let _ = state.save(env.root());
    }

    Ok(PipelineReport {
        entry_point: env.link_path(),
        link_target: stages::publish::link_target(),
    })
}

fn run_stage(
    stage: Stage,
    env: &BootstrapEnv,
    state: &mut ProvisionState,
) -> BootstrapResult<StageOutcome> {
    match stage {
        Stage::Prerequisites => stages::prereq::check(env),
        Stage::ResolveSource => stages::archive::resolve(env),
        Stage::PatchConfig => stages::patch::apply(env, state),
        Stage::Build => stages::build::compile(env),
        Stage::Publish => stages::publish::publish(env),
    }
}
