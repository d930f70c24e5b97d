//! Erine fan-site server.
//!
//! Main entry point that wires configuration, database, cache, and the
//! HTTP API together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use erine_api::state::AppState;
use erine_cache::provider::CacheManager;
use erine_core::config::AppConfig;
use erine_core::error::AppError;
use erine_database::repositories::{
    MemoryEventRepository, MemoryGalleryRepository, MemoryMessageRepository,
    MemoryProfileRepository, PgEventRepository, PgGalleryRepository, PgMessageRepository,
    PgProfileRepository,
};

#[tokio::main]
async fn main() {
    let env = std::env::var("ERINE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Erine server v{}", env!("CARGO_PKG_VERSION"));

    // ── Cache ────────────────────────────────────────────────
    tracing::info!(provider = %config.cache.provider, "Initializing cache");
    let cache = Arc::new(CacheManager::new(&config.cache).await?);

    // ── Repositories ─────────────────────────────────────────
    // An empty database URL selects the in-memory repositories so the
    // server runs without Postgres for local development.
    let state = if config.database.url.is_empty() {
        tracing::warn!("No database URL configured, using in-memory repositories");
        AppState {
            config: Arc::new(config.clone()),
            cache: Arc::clone(&cache),
            profiles: Arc::new(MemoryProfileRepository::new()),
            gallery: Arc::new(MemoryGalleryRepository::new()),
            events: Arc::new(MemoryEventRepository::new()),
            messages: Arc::new(MemoryMessageRepository::new()),
        }
    } else {
        let db = erine_database::DatabasePool::connect(&config.database).await?;
        db.run_migrations().await?;

        let pool = db.pool().clone();
        AppState {
            config: Arc::new(config.clone()),
            cache: Arc::clone(&cache),
            profiles: Arc::new(PgProfileRepository::new(pool.clone())),
            gallery: Arc::new(PgGalleryRepository::new(pool.clone())),
            events: Arc::new(PgEventRepository::new(pool.clone())),
            messages: Arc::new(PgMessageRepository::new(pool)),
        }
    };

    // ── HTTP server ──────────────────────────────────────────
    let app = erine_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Erine server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Erine server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
