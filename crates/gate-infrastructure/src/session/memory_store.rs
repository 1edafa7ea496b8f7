// ============================================================================
// Gate Infrastructure - In-Memory Session Store
// File: crates/gate-infrastructure/src/session/memory_store.rs
// ============================================================================

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, info};

use gate_core::domain::{Session, SessionId};
use gate_core::error::DomainError;
use gate_core::repositories::SessionStore;

/// Process-local session storage. Entries are never evicted here; expiry is
/// decided by the gate when a session is read.
pub struct MemorySessionStore {
    sessions: DashMap<SessionId, Session>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        info!("Initializing in-memory session store");
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        Ok(self.sessions.get(id).map(|entry| entry.value().clone()))
    }

    async fn set(&self, id: &SessionId, session: Session) -> Result<(), DomainError> {
        self.sessions.insert(id.clone(), session);
        debug!("Updated session {} in store", id);
        Ok(())
    }
}
