//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Conversation Ports
//!
//! - `SessionStore` - Per-user session lookup with get-or-create semantics
//!
//! ## Persistence Ports
//!
//! - `SummaryLog` - Durable append-only sink for closing summaries

mod session_store;
mod summary_log;

pub use session_store::{SessionHandle, SessionStore};
pub use summary_log::{SummaryLog, SummaryLogError};
