//! Server assembly: database pool, migrations, service wiring, and serving.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

use crate::config::Config;
use crate::domain::repositories::{LinkRepository, UserRepository};
use crate::infrastructure::cache::{CacheService, MokaCache, NullCache};
use crate::infrastructure::persistence::{PgLinkRepository, PgUserRepository};
use crate::infrastructure::qr::SvgQrEncoder;
use crate::routes::app_router;
use crate::state::AppState;

/// Connects to the database, runs migrations, and serves the API until
/// interrupted.
///
/// # Errors
///
/// Returns an error if the database is unreachable, migrations fail, or
/// the listen address cannot be bound.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let links: Arc<dyn LinkRepository> = Arc::new(PgLinkRepository::new(pool.clone()));
    let users: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool));

    let cache: Arc<dyn CacheService> = if config.cache_enabled {
        Arc::new(MokaCache::new(
            config.cache_capacity,
            Duration::from_secs(config.cache_ttl_seconds),
        ))
    } else {
        Arc::new(NullCache::new())
    };

    let state = AppState::new(
        links,
        users,
        cache,
        Arc::new(SvgQrEncoder::new()),
        &config.base_url,
        &config.jwt_secret,
    );

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install shutdown signal handler: {e}");
        return;
    }
    tracing::info!("shutdown signal received");
}
