//! Conversation Domain Module
//!
//! Per-user dialog state and the pure transition function that drives it.
//!
//! - **Action**: what the transport delivered (menu pick, free text, callback token, command)
//! - **DialogState**: `AwaitingInput` or `AwaitingSummary`
//! - **transition**: `(state, action) → (next state, effects)`, no I/O
//! - **Session** / **Turn**: tone, dialog state and the append-only turn history
//! - **SummaryRecord**: the closing note plus a digest of recent turns

pub mod action;
pub mod reply;
pub mod session;
pub mod state;
pub mod summary;
pub mod transition;
pub mod turn;

pub use action::{Action, MenuButton};
pub use reply::{FollowUp, TurnReply};
pub use session::Session;
pub use state::DialogState;
pub use summary::{digest, SummaryRecord};
pub use transition::{transition, Effect, Transition};
pub use turn::Turn;
