//! Conversation command handlers.
//!
//! Runs one user action through the dialog state machine and carries out
//! the resulting effects.

mod process_turn;

pub use process_turn::{
    ProcessTurnCommand, ProcessTurnError, ProcessTurnHandler, ProcessTurnResult,
};
