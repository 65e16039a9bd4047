//! Session Store Port - Interface for per-user conversation sessions.
//!
//! Each session sits behind its own async mutex. Callers hold the lock for
//! the whole turn so actions for one user are applied one at a time, while
//! different users proceed independently.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::conversation::Session;
use crate::domain::foundation::UserId;

/// Shared, lockable session.
pub type SessionHandle = Arc<Mutex<Session>>;

/// Port for looking up conversation sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the session for `user_id`, creating it on first contact.
    ///
    /// Concurrent first contacts for the same user must yield the same
    /// handle; no session is ever lost or duplicated.
    async fn session(&self, user_id: UserId) -> SessionHandle;

    /// Number of known sessions.
    async fn len(&self) -> usize;
}
