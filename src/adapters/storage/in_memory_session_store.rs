//! In-Memory Session Store Adapter
//!
//! Sessions live for the lifetime of the process and are never evicted.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::conversation::Session;
use crate::domain::foundation::UserId;
use crate::domain::script::Tone;
use crate::ports::{SessionHandle, SessionStore};

/// In-memory map of user id to session
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<UserId, SessionHandle>>>,
    default_tone: Tone,
}

impl InMemorySessionStore {
    /// Create an empty store; new sessions start in `default_tone`
    pub fn new(default_tone: Tone) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            default_tone,
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(Tone::default())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn session(&self, user_id: UserId) -> SessionHandle {
        if let Some(existing) = self.sessions.read().await.get(&user_id) {
            return Arc::clone(existing);
        }

        // Re-check under the write lock: another task may have inserted first.
        let mut sessions = self.sessions.write().await;
        let handle = sessions.entry(user_id).or_insert_with(|| {
            tracing::debug!(user_id = %user_id, "Creating session");
            Arc::new(Mutex::new(Session::new(user_id, self.default_tone)))
        });
        Arc::clone(handle)
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::DialogState;

    #[tokio::test]
    async fn first_contact_creates_session_with_default_tone() {
        let store = InMemorySessionStore::new(Tone::Soft);

        let handle = store.session(UserId::new(7)).await;
        let session = handle.lock().await;

        assert_eq!(session.user_id(), UserId::new(7));
        assert_eq!(session.tone(), Tone::Soft);
        assert_eq!(session.state(), DialogState::AwaitingInput);
        assert!(session.turns().is_empty());
    }

    #[tokio::test]
    async fn repeated_lookup_returns_same_session() {
        let store = InMemorySessionStore::default();

        let first = store.session(UserId::new(1)).await;
        first.lock().await.rotate_tone();
        let second = store.session(UserId::new(1)).await;

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.lock().await.tone(), Tone::Expert);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn new_store_is_empty() {
        let store = InMemorySessionStore::default();
        assert_eq!(store.len().await, 0);

        store.session(UserId::new(3)).await;
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn concurrent_first_contacts_share_one_session() {
        let store = InMemorySessionStore::default();

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.session(UserId::new(42)).await })
            })
            .collect();

        let mut handles = Vec::new();
        for task in tasks {
            handles.push(task.await.unwrap());
        }

        assert_eq!(store.len().await, 1);
        assert!(handles.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[tokio::test]
    async fn different_users_get_distinct_sessions() {
        let store = InMemorySessionStore::default();

        let a = store.session(UserId::new(1)).await;
        let b = store.session(UserId::new(2)).await;

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(store.len().await, 2);
    }
}
