use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::authorize::authorizers::session_auth::session_store::SessionStore;

use super::session_id::SessionId;

/// Process-local sessions. Nothing expires and everything is lost on restart.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session_id: SessionId, user_id: String) {
        self.sessions.write().await.insert(session_id, user_id);
    }

    async fn user_id(&self, session_id: &str) -> Option<String> {
        self.sessions.read().await.get(session_id).cloned()
    }

    async fn remove(&self, session_id: &str) -> Option<String> {
        self.sessions.write().await.remove(session_id)
    }
}
