// ============================================================================
// Gate API - Session Gate Handlers
// File: crates/gate-api/src/handlers/gate.rs
// ============================================================================
//! GET shows the gate, POST submits the login form. Both end in exactly one page.

use axum::{
    extract::{rejection::FormRejection, OriginalUri, State},
    http::{header, HeaderMap, HeaderValue, Uri},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use tracing::debug;

use gate_core::{GateRequest, LoginSubmission};
use gate_shared::config::AppSettings;
use gate_shared::utils::unix_now;

use crate::error::ApiError;
use crate::render::LoginView;
use crate::session_cookie::{format_set_cookie, resolve_session};
use crate::state::AppState;

/// Login form fields as posted by the login page
#[derive(Default, Deserialize)]
pub struct LoginForm {
    pub submit: Option<String>,
    pub input_user: Option<String>,
    pub input_password: Option<String>,
}

impl LoginForm {
    /// A submission only exists when the submit control was sent
    pub fn into_submission(self) -> Option<LoginSubmission> {
        let LoginForm { submit, input_user, input_password } = self;
        submit.map(|_| LoginSubmission::new(input_user, input_password))
    }
}

/// Gate view handler - GET {gate.path}
pub async fn show_gate(
    State(state): State<AppState>,
    headers: HeaderMap,
    OriginalUri(uri): OriginalUri,
) -> Result<Response, ApiError> {
    run_gate(&state, &headers, &uri, None).await
}

/// Login submission handler - POST {gate.path}
///
/// A body that is not a well-formed login form counts as no submission.
pub async fn submit_gate(
    State(state): State<AppState>,
    headers: HeaderMap,
    OriginalUri(uri): OriginalUri,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let submission = match form {
        Ok(Form(form)) => form.into_submission(),
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "Ignoring unreadable login form");
            None
        }
    };
    run_gate(&state, &headers, &uri, submission).await
}

async fn run_gate(
    state: &AppState,
    headers: &HeaderMap,
    uri: &Uri,
    submission: Option<LoginSubmission>,
) -> Result<Response, ApiError> {
    let session = resolve_session(headers, &state.config.session.cookie_name);

    let outcome = state
        .gate
        .handle(GateRequest {
            session_id: session.id.clone(),
            submission,
            now: unix_now(),
        })
        .await?;

    debug!(
        session = %session.id,
        issued = session.issued,
        ?outcome,
        "Gate decision for {}",
        uri
    );

    let body = match outcome.login_message() {
        Some(message) => {
            let action = form_action(&state.config.app, headers, uri);
            state.renderer.render_login(&LoginView { message, action: &action })?
        }
        None => state.renderer.render_artifact(&state.artifact)?,
    };

    let mut response = Html(body).into_response();
    let response_headers = response.headers_mut();
    response_headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    if session.issued {
        response_headers.insert(
            header::SET_COOKIE,
            format_set_cookie(
                &state.config.session.cookie_name,
                &session.id,
                state.config.app.public_scheme == "https",
            )?,
        );
    }

    Ok(response)
}

/// Full URL of the current request, used as the login form target
pub fn form_action(app: &AppSettings, headers: &HeaderMap, uri: &Uri) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}:{}", app.host, app.port));
    let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    format!("{}://{}{}", app.public_scheme, host, path)
}
