use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use gate_api::{build_router, AppState};
use gate_infrastructure::MemorySessionStore;
use gate_shared::config::AppConfig;
use gate_shared::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            let _ = telemetry::init_telemetry(false, None);
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry
    let _log_guard = telemetry::init_telemetry(config.app.debug, config.logging.directory.as_deref())?;

    info!("Artifact gate starting...");
    info!(
        "Gate path {}, session expiry {}s, static assets from {}",
        config.gate.path, config.auth.expire_time_secs, config.gate.static_dir
    );

    // Create App State
    let store = Arc::new(MemorySessionStore::new());
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    let state = match AppState::new(config, store) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            std::process::exit(1);
        }
    };

    // Build router
    let app = build_router(state);

    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Artifact gate stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
