use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::extract::Request;
use axum::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yelpcamp_api::config::{ServerConfig, StoreBackend};
use yelpcamp_api::router;
use yelpcamp_api::state::AppState;
use yelpcamp_api::views::Views;
use yelpcamp_db::{CampgroundStore, DbPool, MemoryCampgroundStore, PgCampgroundStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "yelpcamp_api=debug,yelpcamp_db=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!(
        host = %config.host,
        port = %config.port,
        store = ?config.store_backend,
        "Loaded server configuration"
    );

    // --- Store ---
    let (store, pool) = connect_store(&config).await?;

    // --- Views ---
    let views = Views::new().context("Failed to compile view templates")?;

    // --- App state ---
    let state = AppState {
        store,
        views,
        config: Arc::new(config.clone()),
    };

    let app = router::build_app_service(state, &config);

    // --- Start server ---
    let host: IpAddr = config
        .host
        .parse()
        .with_context(|| format!("Invalid HOST address '{}'", config.host))?;
    let addr = SocketAddr::new(host, config.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    if let Some(pool) = pool {
        let timeout = Duration::from_secs(config.shutdown_timeout_secs);
        if tokio::time::timeout(timeout, pool.close()).await.is_err() {
            tracing::warn!("Timed out closing database pool");
        } else {
            tracing::info!("Database pool closed");
        }
    }

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Construct the configured store. The pool is returned separately so it
/// can be closed after the server drains.
async fn connect_store(
    config: &ServerConfig,
) -> anyhow::Result<(Arc<dyn CampgroundStore>, Option<DbPool>)> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let pool = yelpcamp_db::create_pool(&config.database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connected");

            yelpcamp_db::health_check(&pool)
                .await
                .context("Database health check failed")?;

            yelpcamp_db::run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");

            let store = PgCampgroundStore::new(pool.clone());
            Ok((Arc::new(store), Some(pool)))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory store; campgrounds are lost on shutdown");
            Ok((Arc::new(MemoryCampgroundStore::new()), None))
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
