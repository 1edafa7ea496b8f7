//! Router composition

use axum::{routing::get, Router};
use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

use gate_shared::constants::HEALTH_PATH;

use crate::handlers::{gate, health};
use crate::state::AppState;

/// Gate endpoint, health check, and the static assets the pages reference.
/// Anything not routed is looked up in the static directory.
pub fn build_router(state: AppState) -> Router {
    let gate_path = state.config.gate.path.clone();
    let static_dir = state.config.gate.static_dir.clone();

    Router::new()
        .route(HEALTH_PATH, get(health::health_check))
        .route(&gate_path, get(gate::show_gate).post(gate::submit_gate))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use config::{File, FileFormat};
    use gate_core::repositories::SessionStore;
    use gate_core::{DomainError, Session, SessionId};
    use gate_infrastructure::MemorySessionStore;
    use gate_shared::config::AppConfig;
    use gate_shared::utils::unix_now;
    use tower::ServiceExt;

    const EXPIRE: i64 = 20;
    const COOKIE: &str = "ARTIFACT_SESSION";
    const PROMPT: &str = "Please enter your user name and password.";
    const REJECT: &str = "Incorrect user name or password.";

    const CONFIG: &str = r#"
        [auth]
        admin_username = "user"
        admin_password = "pass"
        expire_time_secs = 20

        [gate]
        static_dir = "tests/fixtures/static"

        [artifact]
        image_large = "249576873.jpg"
        image_medium = "249576873_md.jpg"
        year = "2011"
        semester = "Fall"
        course_id = "ASC301"
        course_name = "Design Studio II"
        studio_master = "Marco Polo"
        instructor = "George Kapelos"
        assignment_name = "Project 1 - Liminal Space"
        assignment_duration = "2 weeks"
        student_name = "Rutherford, Nicola"
        submission_id = "ASC301.F11-01-01"
        evaluation = "high_pass"
    "#;

    fn test_config() -> AppConfig {
        let builder = AppConfig::with_defaults()
            .unwrap()
            .add_source(File::from_str(CONFIG, FileFormat::Toml));
        AppConfig::from_builder(builder).unwrap()
    }

    fn app_with(store: Arc<dyn SessionStore>) -> Router {
        build_router(AppState::new(test_config(), store).unwrap())
    }

    fn get(cookie: Option<&SessionId>, uri: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::HOST, "gallery.example.edu");
        if let Some(id) = cookie {
            builder = builder.header(header::COOKIE, format!("{}={}", COOKIE, id));
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post(cookie: &SessionId, form: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::HOST, "gallery.example.edu")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(header::COOKIE, format!("{}={}", COOKIE, cookie))
            .body(Body::from(form.to_string()))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn is_artifact_page(html: &str) -> bool {
        html.contains("<title>Artifact</title>")
            && html.contains("<tr><td>Student Name</td><td>Rutherford, Nicola</td></tr>")
    }

    #[tokio::test]
    async fn test_first_visit_prompts_and_issues_cookie() {
        let store = Arc::new(MemorySessionStore::new());
        let app = app_with(store.clone());

        let response = app.oneshot(get(None, "/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with("ARTIFACT_SESSION="));
        assert_eq!(response.headers().get(header::CACHE_CONTROL).unwrap(), "no-store");

        let html = body_text(response).await;
        assert!(html.contains(PROMPT));
        assert!(html.contains(r#"action="http://gallery.example.edu/""#));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_known_cookie_is_not_reissued() {
        let store = Arc::new(MemorySessionStore::new());
        let id = SessionId::generate();

        let response = app_with(store).oneshot(get(Some(&id), "/")).await.unwrap();

        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_login_with_padded_user_name_grants_access() {
        let store = Arc::new(MemorySessionStore::new());
        let app = app_with(store.clone());
        let id = SessionId::generate();

        let response = app
            .clone()
            .oneshot(post(&id, "input_user=+user+&input_password=pass&submit=Login"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(is_artifact_page(&body_text(response).await));

        let session = store.get(&id).await.unwrap().unwrap();
        assert_eq!(session.authenticated, Some(true));
        let created = session.created_at.unwrap();
        assert!((unix_now() - created).abs() <= 5);

        // Later requests on the same session need no credentials.
        let response = app.oneshot(get(Some(&id), "/")).await.unwrap();
        assert!(is_artifact_page(&body_text(response).await));
    }

    #[tokio::test]
    async fn test_wrong_password_shows_error() {
        let store = Arc::new(MemorySessionStore::new());
        let id = SessionId::generate();

        let response = app_with(store.clone())
            .oneshot(post(&id, "input_user=user&input_password=wrong&submit=Login"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(REJECT));
        assert!(!is_artifact_page(&html));
        assert!(store.get(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_post_without_submit_prompts() {
        let store = Arc::new(MemorySessionStore::new());
        let id = SessionId::generate();

        let response = app_with(store.clone())
            .oneshot(post(&id, "input_user=user&input_password=pass"))
            .await
            .unwrap();

        assert!(body_text(response).await.contains(PROMPT));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_post_without_form_body_prompts() {
        let store = Arc::new(MemorySessionStore::new());
        let id = SessionId::generate();
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(header::HOST, "gallery.example.edu")
            .header(header::COOKIE, format!("{}={}", COOKIE, id))
            .body(Body::empty())
            .unwrap();

        let response = app_with(store.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains(PROMPT));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_post_with_repeated_field_prompts() {
        let store = Arc::new(MemorySessionStore::new());
        let id = SessionId::generate();

        let response = app_with(store.clone())
            .oneshot(post(&id, "input_user=user&input_user=x&input_password=pass&submit=Login"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains(PROMPT));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_query_string_credentials_are_ignored() {
        let store = Arc::new(MemorySessionStore::new());
        let id = SessionId::generate();

        let response = app_with(store.clone())
            .oneshot(get(Some(&id), "/?submit=Login&input_user=user&input_password=pass"))
            .await
            .unwrap();

        assert!(body_text(response).await.contains(PROMPT));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_session_within_window_is_trusted() {
        let store = Arc::new(MemorySessionStore::new());
        let id = SessionId::generate();
        store.set(&id, Session::authenticated_at(unix_now())).await.unwrap();

        let response = app_with(store).oneshot(get(Some(&id), "/")).await.unwrap();

        assert!(is_artifact_page(&body_text(response).await));
    }

    #[tokio::test]
    async fn test_expired_session_requires_login_again() {
        let store = Arc::new(MemorySessionStore::new());
        let id = SessionId::generate();
        let stale = Session::authenticated_at(unix_now() - EXPIRE - 60);
        store.set(&id, stale.clone()).await.unwrap();

        let response = app_with(store.clone()).oneshot(get(Some(&id), "/")).await.unwrap();

        assert!(body_text(response).await.contains(PROMPT));
        // The stale record stays until the next successful login.
        assert_eq!(store.get(&id).await.unwrap(), Some(stale));
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = app_with(Arc::new(MemorySessionStore::new()));

        let response = app.oneshot(get(None, "/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["status"], "healthy");
        assert_eq!(json["data"]["service"], "artifact-gate");
    }

    #[tokio::test]
    async fn test_static_asset_served_without_login() {
        let app = app_with(Arc::new(MemorySessionStore::new()));

        let response = app.oneshot(get(None, "/lib/screen.css")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("background"));
    }

    #[tokio::test]
    async fn test_missing_static_asset_is_not_found() {
        let app = app_with(Arc::new(MemorySessionStore::new()));

        let response = app.oneshot(get(None, "/lib/missing.css")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    struct FailingStore;

    #[async_trait]
    impl SessionStore for FailingStore {
        async fn get(&self, _id: &SessionId) -> Result<Option<Session>, DomainError> {
            Err(DomainError::SessionStoreError("unavailable".to_string()))
        }

        async fn set(&self, _id: &SessionId, _session: Session) -> Result<(), DomainError> {
            Err(DomainError::SessionStoreError("unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_error() {
        let app = app_with(Arc::new(FailingStore));

        let response = app.oneshot(get(None, "/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"]["code"], "SESSION_STORE_ERROR");
    }
}
