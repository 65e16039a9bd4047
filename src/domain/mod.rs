//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, state machine trait, errors)
//! - `script` - Intent classification, slot extraction and reply composition
//! - `conversation` - Sessions, turns, the dialog state machine and closing summaries

pub mod conversation;
pub mod foundation;
pub mod script;
