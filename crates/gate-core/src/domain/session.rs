// ============================================================================
// Gate Core - Session Entity
// File: crates/gate-core/src/domain/session.rs
// Description: Server-held session state and its identifier
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque session identifier carried by the client cookie
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Accept a client-supplied identifier only if it is one we could have issued
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim())
            .ok()
            .map(|id| Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the gate must treat a session at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Unauthenticated,
    Expired,
    Valid,
}

/// Session record. Both fields may be absent on a session that never logged in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "AUTHENTICATED", default, skip_serializing_if = "Option::is_none")]
    pub authenticated: Option<bool>,

    /// Unix seconds of the last successful login
    #[serde(rename = "CREATED", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl Session {
    /// Session state written after a successful credential check
    pub fn authenticated_at(now: i64) -> Self {
        Self {
            authenticated: Some(true),
            created_at: Some(now),
        }
    }

    /// Classify the session. Only strictly exceeding the expiry window expires it.
    pub fn status(&self, now: i64, expire_time_secs: i64) -> SessionStatus {
        let (authenticated, created_at) = match (self.authenticated, self.created_at) {
            (Some(authenticated), Some(created_at)) => (authenticated, created_at),
            _ => return SessionStatus::Unauthenticated,
        };

        if now.saturating_sub(created_at) > expire_time_secs {
            SessionStatus::Expired
        } else if authenticated {
            SessionStatus::Valid
        } else {
            SessionStatus::Unauthenticated
        }
    }
}
