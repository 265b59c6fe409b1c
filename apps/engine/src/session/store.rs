//! Session registry — one locked [`DifficultyEngine`] per test session.
//!
//! Sharing a single engine across concurrent test-takers corrupts every
//! trajectory involved, so the store is the only supported way to obtain an
//! engine: each session gets its own `Arc<Mutex<_>>` and callers hold the
//! lock across one whole orchestration call (score, summary, synthesis).

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::info;
use uuid::Uuid;

pub type SessionId = Uuid;

/// A session's engine, serialized behind its own lock.
pub type SessionEngine = Arc<Mutex<super::DifficultyEngine>>;

#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, SessionEngine>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh session with its own engine and returns its id.
    pub async fn create_session(&self) -> SessionId {
        let id = Uuid::new_v4();
        let engine = Arc::new(Mutex::new(super::DifficultyEngine::new()));
        self.sessions.write().await.insert(id, engine);
        info!("Created interview session {id}");
        id
    }

    /// Looks up the engine for a session. `None` once the session has ended.
    pub async fn engine(&self, id: SessionId) -> Option<SessionEngine> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Drops a session and its history. Irreversible.
    pub async fn end_session(&self, id: SessionId) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!("Ended interview session {id}");
        }
        removed
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
