//! Course Cache - course lookup service with a timed in-process cache
//!
//! Serves course lists by owner and single courses by id from SQLite, with a
//! TTL-bounded, size-capped cache in front of the database.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_cache::repository::seed_from_file;
use course_cache::{create_router, AppState, Config, SqliteCourseRepository};

/// Main entry point for the course service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Open the SQLite pool and create the course table
/// 4. Optionally seed courses from a JSON file
/// 5. Create the cache and Axum router
/// 6. Serve until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "course_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting course service");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}ms, cache_max_entries={}, port={}, database={}",
        config.cache_ttl_ms, config.cache_max_entries, config.server_port, config.database_url
    );

    let repository = SqliteCourseRepository::connect(&config.database_url)
        .await
        .context("failed to open course database")?;
    info!("Course database ready");

    if let Some(path) = &config.seed_path {
        seed_from_file(&repository, path)
            .await
            .context("failed to seed courses")?;
    }

    let state = AppState::from_config(&config, Arc::new(repository));
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
