//! Moostrap - bootstrap and build orchestrator for a LambdaMOO serving environment
//!
//! Moostrap prepares a working directory so that a separately supplied
//! world-database can be loaded and served: it checks that a telnet client is
//! installed, extracts the server source archive if needed, patches the FileIO
//! extension's header to point at a local runtime data directory, drives the
//! `configure`/`make` build, and publishes the resulting executable at a stable
//! `./moo` entry point.

pub mod env;
pub mod error;
pub mod pipeline;
pub mod stages;
pub mod state;

// Re-exports for convenience
pub use env::BootstrapEnv;
pub use error::{BootstrapError, BootstrapResult};
pub use pipeline::{run_pipeline, PipelineReport, Stage, StageOutcome};
pub use state::{ProvisionState, StageStatus};
