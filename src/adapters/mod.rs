//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Session store and summary log implementations
//! - `console` - Line-based transport over stdin/stdout

pub mod console;
pub mod storage;

pub use console::{ConsoleInput, ConsoleTransport};
pub use storage::{InMemorySessionStore, InMemorySummaryLog, JsonLinesSummaryLog};
