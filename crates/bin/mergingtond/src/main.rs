//! # mergingtond — Mergington activity signup daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize `tracing` logging
//! - Seed the in-memory activity directory
//! - Construct the application service, injecting the repository via its port trait
//! - Build the axum router, mounting the static signup page when present
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use mergington_adapter_http_axum::router;
use mergington_adapter_http_axum::state::AppState;
use mergington_adapter_storage_memory::InMemoryActivityRepository;
use mergington_app::services::activity_service::ActivityService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Storage
    let activity_repo = InMemoryActivityRepository::seeded();

    // Services
    let activity_service = ActivityService::new(activity_repo);

    // HTTP
    let state = AppState::new(activity_service);
    let mut app = router::build(state);

    let static_dir = &config.assets.static_dir;
    if static_dir.is_dir() {
        tracing::info!(dir = %static_dir.display(), "serving static assets");
        app = router::with_static_assets(app, static_dir);
    } else {
        tracing::warn!(
            dir = %static_dir.display(),
            "static directory not found, signup page disabled"
        );
    }

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("mergingtond listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("mergingtond stopped");
    Ok(())
}

/// Resolve when Ctrl+C or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("signal received, starting graceful shutdown");
}
