//! Postgres access for venues, artists and shows.
//!
//! Repositories take `&mut PgConnection` so callers decide the unit of work:
//! a pooled connection for reads, or the transaction returned by [`begin`]
//! for writes.

use sqlx::postgres::PgPoolOptions;
use sqlx::{Postgres, Transaction};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// An open unit of work. Dropping it without [`Transaction::commit`] rolls
/// every statement back.
pub type UnitOfWork = Transaction<'static, Postgres>;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to prove the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Open a READ COMMITTED transaction.
///
/// The isolation level is set explicitly rather than inherited from the
/// server default.
pub async fn begin(pool: &DbPool) -> Result<UnitOfWork, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL READ COMMITTED")
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}
