//! Run report serialization.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::engine::{BatchResult, GenerationOutcome};

/// File name of the report inside the output directory.
pub const REPORT_FILE_NAME: &str = "audio_generation_result.json";

/// Errors that can occur while persisting the report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Machine-readable summary consumed by the upload stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub success: usize,
    pub failed: usize,
    /// Wall-clock seconds for the whole batch.
    pub elapsed_time: f64,
    pub files: Vec<GenerationOutcome>,
}

impl RunReport {
    pub fn from_batch(result: &BatchResult) -> Self {
        Self {
            success: result.success,
            failed: result.failed,
            elapsed_time: result.elapsed.as_secs_f64(),
            files: result.outcomes.clone(),
        }
    }

    /// True when no segment failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit code for this run.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }

    /// Write the report as pretty JSON into `dir`, returning its path.
    pub fn write(&self, dir: &Path) -> Result<PathBuf, ReportError> {
        std::fs::create_dir_all(dir)?;

        let path = dir.join(REPORT_FILE_NAME);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;

        info!(path = %path.display(), "result report saved");
        Ok(path)
    }

    /// Read a previously written report.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
