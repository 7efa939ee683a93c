//! Database module providing PostgreSQL connection pooling and schema
//! bootstrap.
//!
//! The connection pool is managed through sqlx. `ensure_schema` creates
//! the `range_sets` table and its lookup index when they are missing,
//! so the crate works against a blank database.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

pub mod config;

pub use config::DatabaseConfig;

/// Database connection pool wrapper
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use range_keeper::db::{Database, DatabaseConfig};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), sqlx::Error> {
    ///     let config = DatabaseConfig::from_env();
    ///     let db = Database::new(&config).await?;
    ///     db.ensure_schema().await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
            .connect(&config.database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the `range_sets` table and its lookup index if missing.
    ///
    /// Idempotent; safe to run at every startup. A foreign key to the
    /// surrounding application's `users` table is intentionally not
    /// declared here; user storage is not this crate's concern.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS range_sets (
                id              BIGSERIAL PRIMARY KEY,
                user_id         BIGINT NOT NULL,
                name            VARCHAR(255) NOT NULL,
                table_type      TEXT NOT NULL,
                category        TEXT NOT NULL,
                starting_stack  BIGINT NOT NULL,
                bounty          BOOLEAN NOT NULL,
                range_data      JSONB NOT NULL,
                created_at      TIMESTAMP NOT NULL DEFAULT NOW(),
                updated_at      TIMESTAMP NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_range_sets_user_updated
             ON range_sets (user_id, updated_at DESC)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Check if the database connection is healthy
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the database connection pool
    pub async fn close(self) {
        self.pool.close().await;
    }
}
