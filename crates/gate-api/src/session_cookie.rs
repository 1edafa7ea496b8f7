//! Session cookie handling

use axum::http::{header, HeaderMap, HeaderValue};
use gate_core::SessionId;

use crate::error::ApiError;

/// Session identifier resolved for the current request
#[derive(Debug, Clone)]
pub struct ResolvedSession {
    pub id: SessionId,
    /// The client presented no usable cookie and must be sent one
    pub issued: bool,
}

/// Find the session identifier in the request cookies, or issue a new one.
/// Identifiers that are not in the issued format are replaced.
pub fn resolve_session(headers: &HeaderMap, cookie_name: &str) -> ResolvedSession {
    match read_session_id(headers, cookie_name) {
        Some(id) => ResolvedSession { id, issued: false },
        None => ResolvedSession {
            id: SessionId::generate(),
            issued: true,
        },
    }
}

pub fn read_session_id(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(|(name, _)| *name == cookie_name)
        .find_map(|(_, value)| SessionId::parse(value))
}

/// `Set-Cookie` value for a newly issued session
pub fn format_set_cookie(cookie_name: &str, id: &SessionId, secure: bool) -> Result<HeaderValue, ApiError> {
    let mut cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", cookie_name, id);
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
        .map_err(|e| ApiError::InternalError(format!("Invalid session cookie: {}", e)))
}
