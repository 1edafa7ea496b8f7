//! Session store trait (port)

use async_trait::async_trait;
use crate::domain::{Session, SessionId};
use crate::error::DomainError;

/// Per-key session persistence. Writes are last-write-wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, id: &SessionId) -> Result<Option<Session>, DomainError>;
    async fn set(&self, id: &SessionId, session: Session) -> Result<(), DomainError>;
}
