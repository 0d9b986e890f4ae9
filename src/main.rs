//! Bank Account Service - Main Application Entry Point
//!
//! A small JSON API for creating, listing, fetching and soft-deleting bank
//! accounts stored in PostgreSQL.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx, behind the `Storage` trait
//! - **Format**: JSON requests/responses, `{"error": ...}` on failure
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool and ping it
//! 3. Create the `account` table if missing
//! 4. Build HTTP router around the storage handle
//! 5. Start server on configured address
//!
//! Any failure during startup ends the process.

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod storage;

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::storage::postgres::PostgresStorage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG, defaults to "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database_url, config.database_max_connections).await?;
    tracing::info!("Database pool created");

    let store = PostgresStorage::new(pool);
    store.init().await?;
    tracing::info!("Account table ready");

    let app = handlers::router(Arc::new(store)).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Server listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
