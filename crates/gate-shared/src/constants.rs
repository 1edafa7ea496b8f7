//! Application-wide constants

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PUBLIC_SCHEME: &str = "http";
pub const DEFAULT_GATE_PATH: &str = "/";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_SESSION_COOKIE: &str = "ARTIFACT_SESSION";
/// Session duration in seconds (1800 = 30 minutes).
pub const DEFAULT_EXPIRE_TIME_SECS: i64 = 1800;
pub const HEALTH_PATH: &str = "/health";
