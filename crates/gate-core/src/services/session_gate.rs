// ============================================================================
// Gate Core - Session Gate Service
// File: crates/gate-core/src/services/session_gate.rs
// ============================================================================
//! Decides, once per request, whether the protected page may be shown

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::{Credentials, LoginSubmission, Session, SessionId, SessionStatus};
use crate::error::DomainError;
use crate::repositories::SessionStore;

pub const MSG_PROMPT_CREDENTIALS: &str = "Please enter your user name and password.";
pub const MSG_INVALID_CREDENTIALS: &str = "Incorrect user name or password.";

/// Everything the gate needs to know about one request
#[derive(Debug, Clone)]
pub struct GateRequest {
    pub session_id: SessionId,
    /// Present only when the login form was submitted
    pub submission: Option<LoginSubmission>,
    /// Unix seconds
    pub now: i64,
}

/// Which page the request ends with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// No credentials submitted
    PromptCredentials,
    /// Submitted credentials did not match
    RejectCredentials,
    /// Show the protected page; `logged_in` is set when this request authenticated
    GrantAccess { logged_in: bool },
}

impl GateOutcome {
    /// Message for the login form, `None` when access is granted
    pub fn login_message(&self) -> Option<&'static str> {
        match self {
            GateOutcome::PromptCredentials => Some(MSG_PROMPT_CREDENTIALS),
            GateOutcome::RejectCredentials => Some(MSG_INVALID_CREDENTIALS),
            GateOutcome::GrantAccess { .. } => None,
        }
    }
}

/// Session gate over a shared credential pair
pub struct SessionGate<S: SessionStore + ?Sized> {
    store: Arc<S>,
    credentials: Credentials,
    expire_time_secs: i64,
}

impl<S: SessionStore + ?Sized> SessionGate<S> {
    pub fn new(store: Arc<S>, credentials: Credentials, expire_time_secs: i64) -> Self {
        Self {
            store,
            credentials,
            expire_time_secs,
        }
    }

    /// Evaluate one request. Sessions are only written on a successful login;
    /// expired sessions are left in place and overwritten by the next login.
    pub async fn handle(&self, request: GateRequest) -> Result<GateOutcome, DomainError> {
        let session = self.store.get(&request.session_id).await?.unwrap_or_default();

        match session.status(request.now, self.expire_time_secs) {
            SessionStatus::Valid => {
                debug!("Session {} valid", request.session_id);
                Ok(GateOutcome::GrantAccess { logged_in: false })
            }
            SessionStatus::Expired => {
                debug!("Session {} expired, re-authentication required", request.session_id);
                self.authenticate(request).await
            }
            SessionStatus::Unauthenticated => {
                debug!("Session {} not authenticated", request.session_id);
                self.authenticate(request).await
            }
        }
    }

    async fn authenticate(&self, request: GateRequest) -> Result<GateOutcome, DomainError> {
        let Some(submission) = request.submission else {
            return Ok(GateOutcome::PromptCredentials);
        };

        if !self.credentials.matches(&submission) {
            warn!(
                "Login failed for user name {:?} on session {}",
                submission.username().unwrap_or_default(),
                request.session_id
            );
            return Ok(GateOutcome::RejectCredentials);
        }

        self.store
            .set(&request.session_id, Session::authenticated_at(request.now))
            .await?;

        info!("Login successful on session {}", request.session_id);
        Ok(GateOutcome::GrantAccess { logged_in: true })
    }
}
