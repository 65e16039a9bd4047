//! Dialog state machine.

use serde::{Deserialize, Serialize};

/// Where a user's dialog currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DialogState {
    /// Menu picks and client phrases are classified and answered.
    #[default]
    AwaitingInput,

    /// The next text message is the closing note of the call.
    AwaitingSummary,
}
