//! Database access
//!
//! - [`repository`]: generic CRUD over any [`crate::models::Entity`]
//! - [`links`]: the crop/disease association table
//! - [`sql`]: statement builders used by the repository

pub mod links;
pub mod repository;
pub mod sql;

pub use links::CropDiseaseLinks;
pub use repository::{
    CropRepository, DiseaseRepository, FarmRepository, ImageRepository, Repository,
};

use std::time::Duration;

use sqlx::{
    migrate::{MigrateError, Migrator},
    postgres::{PgPool, PgPoolOptions},
};
use thiserror::Error;

use crate::config::DatabaseConfig;

/// Embedded schema migrations
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Database operation errors with contextual information
#[derive(Error, Debug)]
pub enum DbError {
    /// SQL query or connection error
    #[error("Database query failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Applying schema migrations failed
    #[error("Database migration failed: {0}")]
    Migrate(#[from] MigrateError),
}

pub type DbResult<T> = Result<T, DbError>;

/// Connect a pool sized and timed according to `config`
pub async fn create_pool(config: &DatabaseConfig) -> DbResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Database connection pool created"
    );

    Ok(pool)
}

/// Apply any migrations the database has not seen yet
pub async fn run_migrations(pool: &PgPool) -> DbResult<()> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
