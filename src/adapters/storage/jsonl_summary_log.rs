//! JSON-lines Summary Log Adapter
//!
//! Appends one JSON object per summary record to a file on disk. The file
//! and its parent directories are created on first write.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::domain::conversation::SummaryRecord;
use crate::ports::{SummaryLog, SummaryLogError};

/// File-backed summary sink
#[derive(Debug, Clone)]
pub struct JsonLinesSummaryLog {
    path: PathBuf,
}

impl JsonLinesSummaryLog {
    /// Create a log writing to `path`
    ///
    /// # Example
    /// ```ignore
    /// let log = JsonLinesSummaryLog::new("./data/skriptolog_notes.jsonl");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent(&self) -> Result<(), SummaryLogError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
                .await
                .map_err(|e| SummaryLogError::IoError(e.to_string())),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl SummaryLog for JsonLinesSummaryLog {
    async fn append_record(&self, record: &SummaryRecord) -> Result<(), SummaryLogError> {
        let mut line = serde_json::to_string(record)
            .map_err(|e| SummaryLogError::SerializationFailed(e.to_string()))?;
        line.push('\n');

        self.ensure_parent().await?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| SummaryLogError::IoError(e.to_string()))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| SummaryLogError::IoError(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| SummaryLogError::IoError(e.to_string()))?;

        Ok(())
    }
}
