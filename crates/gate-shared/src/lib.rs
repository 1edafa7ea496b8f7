//! # Gate Shared
//! 
//! Configuration, telemetry, and shared utilities for the artifact gate.

pub mod constants;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::AppError;
