//! Database migration command.
//!
//! Migrations live in `crates/storefront/migrations/` and are embedded into
//! the binary at compile time, so the CLI can run anywhere the database is
//! reachable. Migrations are never run automatically by the storefront
//! binary.

use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;

use super::{CommandError, database_url};

/// Run all pending storefront migrations.
///
/// # Errors
///
/// Returns `CommandError` if the database URL is missing, the connection
/// fails, or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let database_url = database_url()?;

    info!("Connecting to database...");
    let pool = PgPool::connect(database_url.expose_secret()).await?;

    info!("Running migrations...");
    sqlx::migrate!("../storefront/migrations").run(&pool).await?;

    info!("Migrations complete!");
    Ok(())
}
