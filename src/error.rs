//! Error types for moostrap
//!
//! Uses `thiserror` for library errors. Every variant except `Io` maps onto
//! one fatal pipeline condition; the binary turns the variant into an exit
//! code via [`BootstrapError::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bootstrap operations
pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// Main error type for bootstrap operations
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Required client utility is not on PATH
    #[error("required client '{command}' not found on PATH - install it and re-run")]
    MissingPrerequisite { command: String },

    /// Neither an extracted source tree nor a source archive is available
    #[error("neither source tree {tree} nor archive {archive} exists in the working directory")]
    MissingSourceArtifact { archive: PathBuf, tree: PathBuf },

    /// Archive extraction did not produce the expected tree
    #[error("extracting {archive} did not produce {expected} - corrupt or mismatched archive")]
    ExtractionMismatch { archive: PathBuf, expected: PathBuf },

    /// An external build tool exited non-zero or could not be started
    #[error("build tool '{command}' failed{}", match .code { Some(c) => format!(" with exit code {c}"), None => String::from(" to start") })]
    BuildToolFailure { command: String, code: Option<i32> },

    /// The build reported success but the executable is missing or not executable
    #[error("expected executable {path} is missing or not executable")]
    ArtifactMissing { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BootstrapError {
    /// Exit code for the process: failing build tools propagate their own
    /// code, explicit checks exit 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            BootstrapError::BuildToolFailure { code: Some(c), .. } => *c,
            _ => 1,
        }
    }
}
