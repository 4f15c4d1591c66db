//! Provisioning state persisted between runs
//!
//! The filesystem itself (tree present, link present) stays the source of
//! truth for idempotence; this record exists so a failed run can be diagnosed
//! without guessing which stage it died in, and so a re-patch after the
//! working directory moved can find the previously written data path.
//! Stored in `.moostrap-state.json` next to the tree.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const STATE_FILE: &str = ".moostrap-state.json";

/// Outcome of one stage as recorded on disk
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Completed,
    Skipped,
}

/// One completed (or skipped) stage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StageRecord {
    pub stage: String,
    pub status: StageStatus,
    pub completed_at: DateTime<Utc>,
}

/// Ordered provisioning record for one working directory
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProvisionState {
    #[serde(default)]
    pub stages: Vec<StageRecord>,

    /// Runtime data directory the FileIO header was last patched to
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl ProvisionState {
    /// Load state from the working directory; missing or unreadable state
    /// falls back to the default (the record is advisory).
    pub fn load(dir: &Path) -> Self {
        let state_file = dir.join(STATE_FILE);
        if state_file.exists() {
            if let Ok(content) = fs::read_to_string(&state_file) {
                if let Ok(state) = serde_json::from_str(&content) {
                    return state;
                }
            }
        }
        Self::default()
    }

    /// Save state to the working directory.
    pub fn save(&self, dir: &Path) -> std::io::Result<()> {
        let state_file = dir.join(STATE_FILE);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(state_file, content)
    }

    /// Record a stage outcome, replacing any prior record for the same stage.
    pub fn record(&mut self, stage: &str, status: StageStatus) {
        let record = StageRecord {
            stage: stage.to_string(),
            status,
            completed_at: Utc::now(),
        };
        if let Some(existing) = self.stages.iter_mut().find(|r| r.stage == stage) {
            *existing = record;
        } else {
            self.stages.push(record);
        }
    }

    /// Status of a stage, if it has ever been recorded.
    pub fn status_of(&self, stage: &str) -> Option<StageStatus> {
        self.stages
            .iter()
            .find(|r| r.stage == stage)
            .map(|r| r.status)
    }
}
