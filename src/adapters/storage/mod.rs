//! Storage Adapters
//!
//! Implementations of the session and summary persistence ports.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionStore** - Per-user sessions in a shared map
//! - **JsonLinesSummaryLog** - Appends summary records as JSON lines on disk
//! - **InMemorySummaryLog** - Keeps summary records in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemorySessionStore, JsonLinesSummaryLog};
//!
//! let sessions = InMemorySessionStore::new(Tone::Confident);
//! let log = JsonLinesSummaryLog::new("./data/skriptolog_notes.jsonl");
//! ```

mod in_memory_session_store;
mod in_memory_summary_log;
mod jsonl_summary_log;

pub use in_memory_session_store::InMemorySessionStore;
pub use in_memory_summary_log::InMemorySummaryLog;
pub use jsonl_summary_log::JsonLinesSummaryLog;
