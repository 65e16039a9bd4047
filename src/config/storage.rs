//! Summary storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where closing summaries are written
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON-lines summary log
    #[serde(default = "default_summary_path")]
    pub summary_path: PathBuf,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.summary_path.as_os_str().is_empty() {
            return Err(ValidationError::InvalidSummaryPath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            summary_path: default_summary_path(),
        }
    }
}

fn default_summary_path() -> PathBuf {
    PathBuf::from("skriptolog_notes.jsonl")
}
