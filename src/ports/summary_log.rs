//! Summary Log Port - Interface for persisting closing summaries.
//!
//! Records are append-only. One call writes exactly one record.

use async_trait::async_trait;

use crate::domain::conversation::SummaryRecord;

/// Errors that can occur while appending a summary record
#[derive(Debug, thiserror::Error)]
pub enum SummaryLogError {
    #[error("Failed to serialize record: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Summary log unavailable: {0}")]
    Unavailable(String),
}

/// Port for the durable summary sink
#[async_trait]
pub trait SummaryLog: Send + Sync {
    /// Append one record.
    ///
    /// # Errors
    /// Returns `SummaryLogError` if the record could not be written. Nothing
    /// is written in that case.
    async fn append_record(&self, record: &SummaryRecord) -> Result<(), SummaryLogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_cause() {
        let err = SummaryLogError::IoError("disk full".to_string());
        assert_eq!(err.to_string(), "IO error: disk full");

        let err = SummaryLogError::Unavailable("switched off".to_string());
        assert!(err.to_string().contains("switched off"));
    }
}
