//! Seed the database with the reference catalog.
//!
//! Clears and repopulates the users and shirts tables inside a single
//! transaction, so a concurrently browsing session never observes a
//! half-seeded catalog.

use tracing::info;

use kitlocker_storefront::db;

use super::{CommandError, database_url};

/// Clear and repopulate the catalog.
///
/// # Errors
///
/// Returns `CommandError` if the database URL is missing, the connection
/// fails, or the seeding transaction fails.
pub async fn run() -> Result<(), CommandError> {
    let database_url = database_url()?;

    info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    info!("Seeding database (replaces all users and shirts)...");
    let summary = db::seed::run(&pool).await?;

    info!("Database seeded with initial data.");
    info!("  Users inserted: {}", summary.users);
    info!("  Shirts inserted: {}", summary.shirts);

    Ok(())
}
