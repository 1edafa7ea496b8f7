//! Configuration management

use std::fmt;

use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::constants::{
    DEFAULT_EXPIRE_TIME_SECS, DEFAULT_GATE_PATH, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_PUBLIC_SCHEME, DEFAULT_SESSION_COOKIE, DEFAULT_STATIC_DIR, HEALTH_PATH,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    #[validate(nested)]
    pub app: AppSettings,
    #[validate(nested)]
    pub auth: AuthSettings,
    #[validate(nested)]
    pub session: SessionSettings,
    #[validate(nested)]
    pub gate: GateSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[validate(nested)]
    pub artifact: ArtifactSettings,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppSettings {
    pub env: String,
    #[validate(length(min = 1, message = "Host is required"))]
    pub host: String,
    pub port: u16,
    pub name: String,
    /// Scheme used when echoing the request URL back as the login form target.
    #[validate(custom(function = "validate_scheme"))]
    pub public_scheme: String,
    /// Verbose request diagnostics.
    pub debug: bool,
}

#[derive(Deserialize, Clone, Validate)]
pub struct AuthSettings {
    #[validate(length(min = 1, message = "Admin user name is required"))]
    pub admin_username: String,
    #[validate(length(min = 1, message = "Admin password is required"))]
    pub admin_password: String,
    /// Session duration in seconds.
    #[validate(range(min = 0, message = "Expire time cannot be negative"))]
    pub expire_time_secs: i64,
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("admin_username", &self.admin_username)
            .field("admin_password", &"***")
            .field("expire_time_secs", &self.expire_time_secs)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct SessionSettings {
    #[validate(length(min = 1, max = 64, message = "Cookie name must be between 1 and 64 characters"))]
    pub cookie_name: String,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct GateSettings {
    #[validate(custom(function = "validate_gate_path"))]
    pub path: String,
    /// Directory holding stylesheets, gallery scripts and artifact images.
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoggingSettings {
    /// When set, logs are also written to a daily rolling file in this directory.
    #[serde(default)]
    pub directory: Option<String>,
}

/// Metadata of the single artifact served by this deployment.
#[derive(Debug, Deserialize, Clone, Validate)]
pub struct ArtifactSettings {
    #[validate(length(min = 1, message = "Large image file name is required"))]
    pub image_large: String,
    #[validate(length(min = 1, message = "Medium image file name is required"))]
    pub image_medium: String,
    pub year: String,
    pub semester: String,
    pub course_id: String,
    pub course_name: String,
    pub studio_master: String,
    pub instructor: String,
    pub assignment_name: String,
    pub assignment_duration: String,
    pub student_name: String,
    pub submission_id: String,
    /// One of `high_pass`, `low_pass` or `none`.
    pub evaluation: String,
}

fn validate_scheme(scheme: &str) -> Result<(), ValidationError> {
    match scheme {
        "http" | "https" => Ok(()),
        _ => Err(ValidationError::new("public_scheme")
            .with_message("Scheme must be http or https".into())),
    }
}

fn validate_gate_path(path: &str) -> Result<(), ValidationError> {
    if !path.starts_with('/') {
        return Err(ValidationError::new("gate_path").with_message("Gate path must start with '/'".into()));
    }
    if path == HEALTH_PATH {
        return Err(ValidationError::new("gate_path").with_message("Gate path is reserved".into()));
    }
    Ok(())
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let builder = Self::with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("GATE")
                    .separator("__")
                    .try_parsing(true),
            );
        Self::from_builder(builder)
    }

    /// Builder seeded with every default that does not identify the deployment.
    pub fn with_defaults() -> Result<ConfigBuilder<DefaultState>, AppError> {
        Ok(Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", DEFAULT_HOST)?
            .set_default("app.port", i64::from(DEFAULT_PORT))?
            .set_default("app.name", "artifact-gate")?
            .set_default("app.public_scheme", DEFAULT_PUBLIC_SCHEME)?
            .set_default("app.debug", false)?
            .set_default("auth.expire_time_secs", DEFAULT_EXPIRE_TIME_SECS)?
            .set_default("session.cookie_name", DEFAULT_SESSION_COOKIE)?
            .set_default("gate.path", DEFAULT_GATE_PATH)?
            .set_default("gate.static_dir", DEFAULT_STATIC_DIR)?)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
