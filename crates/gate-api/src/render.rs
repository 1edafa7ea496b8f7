//! HTML page rendering

use handlebars::Handlebars;
use serde::Serialize;

use gate_core::{ArtifactRecord, MetadataRow};

use crate::error::ApiError;

const LOGIN_TEMPLATE: &str = "login";
const ARTIFACT_TEMPLATE: &str = "artifact";

/// Login form view model
#[derive(Debug, Serialize)]
pub struct LoginView<'a> {
    pub message: &'a str,
    /// Absolute URL the form posts back to
    pub action: &'a str,
}

/// Artifact page view model
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactView {
    pub image_large: String,
    pub image_medium: String,
    pub rows: Vec<MetadataRow>,
}

impl From<&ArtifactRecord> for ArtifactView {
    fn from(record: &ArtifactRecord) -> Self {
        Self {
            image_large: record.image_large.clone(),
            image_medium: record.image_medium.clone(),
            rows: record.metadata_rows(),
        }
    }
}

/// Renders the two gate pages from templates compiled into the binary.
/// All interpolated values are HTML-escaped.
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, ApiError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_template_string(LOGIN_TEMPLATE, include_str!("../templates/login.hbs"))?;
        registry.register_template_string(ARTIFACT_TEMPLATE, include_str!("../templates/artifact.hbs"))?;
        Ok(Self { registry })
    }

    pub fn render_login(&self, view: &LoginView<'_>) -> Result<String, ApiError> {
        Ok(self.registry.render(LOGIN_TEMPLATE, view)?)
    }

    pub fn render_artifact(&self, view: &ArtifactView) -> Result<String, ApiError> {
        Ok(self.registry.render(ARTIFACT_TEMPLATE, view)?)
    }
}
