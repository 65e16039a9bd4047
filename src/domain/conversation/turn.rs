//! Turn: one classified utterance and the script composed for it.

use serde::{Deserialize, Serialize};

use crate::domain::script::{Intent, SlotSet};

/// Immutable record of one answered utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    client_text: String,
    intent: Intent,
    slots: SlotSet,
    reply: String,
}

impl Turn {
    pub fn new(
        client_text: impl Into<String>,
        intent: Intent,
        slots: SlotSet,
        reply: impl Into<String>,
    ) -> Self {
        Self {
            client_text: client_text.into(),
            intent,
            slots,
            reply: reply.into(),
        }
    }

    pub fn client_text(&self) -> &str {
        &self.client_text
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn slots(&self) -> &SlotSet {
        &self.slots
    }

    pub fn reply(&self) -> &str {
        &self.reply
    }

    /// Single-line form used in summary digests:
    /// `[intent] client => reply with line breaks flattened`.
    pub fn digest_line(&self) -> String {
        format!(
            "[{}] {} => {}",
            self.intent.key(),
            self.client_text,
            self.reply.replace('\n', " ")
        )
    }
}
