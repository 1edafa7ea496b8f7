use std::sync::Arc;

use gate_core::repositories::SessionStore;
use gate_core::{ArtifactRecord, Credentials, SessionGate};
use gate_shared::config::AppConfig;

use crate::error::ApiError;
use crate::render::{ArtifactView, PageRenderer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub gate: Arc<SessionGate<dyn SessionStore>>,
    pub renderer: Arc<PageRenderer>,
    pub artifact: Arc<ArtifactView>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        let credentials = Credentials::new(
            config.auth.admin_username.clone(),
            config.auth.admin_password.clone(),
        );
        let gate = SessionGate::new(store, credentials, config.auth.expire_time_secs);
        let record = ArtifactRecord::from_settings(&config.artifact)?;

        Ok(Self {
            gate: Arc::new(gate),
            renderer: Arc::new(PageRenderer::new()?),
            artifact: Arc::new(ArtifactView::from(&record)),
            config: Arc::new(config),
        })
    }
}
