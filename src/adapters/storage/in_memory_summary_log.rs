//! In-Memory Summary Log Adapter
//!
//! Keeps appended records in memory. A failure switch lets tests exercise
//! the persistence-failure path.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::SummaryRecord;
use crate::ports::{SummaryLog, SummaryLogError};

/// In-memory summary sink
#[derive(Debug, Clone, Default)]
pub struct InMemorySummaryLog {
    records: Arc<RwLock<Vec<SummaryRecord>>>,
    failing: Arc<AtomicBool>,
}

impl InMemorySummaryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log that rejects every append until switched back on
    pub fn failing() -> Self {
        let log = Self::new();
        log.set_failing(true);
        log
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of everything appended so far
    pub async fn records(&self) -> Vec<SummaryRecord> {
        self.records.read().await.clone()
    }

    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl SummaryLog for InMemorySummaryLog {
    async fn append_record(&self, record: &SummaryRecord) -> Result<(), SummaryLogError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(SummaryLogError::Unavailable(
                "in-memory log is switched to failing".to_string(),
            ));
        }
        self.records.write().await.push(record.clone());
        Ok(())
    }
}
