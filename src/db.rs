//! Database connection pool management.
//!
//! The pool is created once at startup and shared by every request through
//! the storage layer. Each in-flight query checks out its own connection, so
//! no extra locking happens above this layer.

use sqlx::{Pool, Postgres};

/// Type alias for PostgreSQL connection pool.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool and verify the server answers.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if:
/// - The connection string is invalid
/// - The server cannot be reached or rejects the credentials
/// - The liveness ping fails
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    ping(&pool).await?;

    Ok(pool)
}

/// One round trip to the server.
pub async fn ping(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
