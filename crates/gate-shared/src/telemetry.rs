//! Telemetry setup

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::AppError;

const LOG_FILE_PREFIX: &str = "artifact-gate.log";

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Installs the global subscriber: JSON to stdout, plus a daily rolling file
/// when `log_dir` is given. The returned guard must be held for the lifetime
/// of the process or buffered file output is lost.
pub fn init_telemetry(debug: bool, log_dir: Option<&str>) -> Result<Option<WorkerGuard>, AppError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().json().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json())
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::TelemetryError(e.to_string()))?;

    Ok(guard)
}
