//! PostgreSQL data access for Linkify.
//!
//! Row models and DTOs live in [`models`]; zero-sized repository structs
//! with async methods over `&PgPool` live in [`repositories`]. The schema
//! itself is owned by the deployment's migration pipeline; each repository
//! documents the tables and columns it touches.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round trip.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
