//! Embedded schema migrations.
//!
//! Migrations run over a synchronous connection; they execute once at
//! startup (or from the `migrate` CLI command), not on the request path.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::error::{AppError, AppResult};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applies all pending migrations against the given database.
pub fn run_migrations(database_url: &str) -> AppResult<()> {
    let mut conn = PgConnection::establish(database_url).map_err(|e| AppError::Database {
        operation: "connect for migrations".to_string(),
        source: anyhow::Error::from(e),
    })?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| AppError::Database {
            operation: "run migrations".to_string(),
            source: anyhow::anyhow!("{e}"),
        })?;

    for migration in &applied {
        tracing::info!(version = %migration, "Applied migration");
    }
    Ok(())
}
