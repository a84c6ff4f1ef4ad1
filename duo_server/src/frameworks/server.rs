// Framework bootstrap for the duo server runtime.

use crate::frameworks::{config, db};
use crate::interface_adapters::routes;
use crate::interface_adapters::state::{AppState, InMemoryStore, PostgresStore};
use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sqlx=warn"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, state: AppState) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let state = build_state().await?;
    let address = SocketAddr::new(config::bind_addr(), config::http_port());

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, state).await
}

async fn build_state() -> Result<AppState> {
    let Some(database_url) = config::database_url() else {
        tracing::warn!("DATABASE_URL is not set; using the in-memory store");
        return Ok(AppState::new(Arc::new(InMemoryStore::default())));
    };

    let max_connections = config::database_max_connections();
    let db = db::connect_pool(&database_url, max_connections)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to connect to database");
            std::io::Error::other(format!("failed to connect to database: {e}"))
        })?;
    tracing::debug!(max_connections, "database pool ready");

    db::run_migrations(&db).await.map_err(|e| {
        tracing::error!(error = %e, "failed to run migrations");
        std::io::Error::other(format!("failed to run migrations: {e}"))
    })?;

    Ok(AppState::new(Arc::new(PostgresStore { db })))
}
