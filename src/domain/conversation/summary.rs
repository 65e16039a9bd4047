//! Closing summary record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

use super::turn::Turn;

/// Separator between turns in a digest.
pub const DIGEST_SEPARATOR: &str = " || ";

/// Durable record written when a call is wrapped up.
///
/// Field order is fixed: timestamp, user id, note, digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Unix seconds.
    pub timestamp: i64,
    pub user_id: UserId,
    pub note: String,
    pub digest: String,
}

impl SummaryRecord {
    pub fn new(user_id: UserId, note: impl Into<String>, recent: &[Turn]) -> Self {
        Self {
            timestamp: Timestamp::now().as_unix_secs(),
            user_id,
            note: note.into().trim().to_string(),
            digest: digest(recent),
        }
    }

    /// Ordered named fields, for sinks that write columns.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("timestamp", self.timestamp.to_string()),
            ("user_id", self.user_id.to_string()),
            ("note", self.note.clone()),
            ("digest", self.digest.clone()),
        ]
    }
}

/// Joins turns into one line, oldest first.
pub fn digest(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(Turn::digest_line)
        .collect::<Vec<_>>()
        .join(DIGEST_SEPARATOR)
}
