//! Shirt repository for catalog reads.
//!
//! The catalog is read-only from the storefront's perspective; the only
//! writer is the seeder in [`super::seed`].

use sqlx::PgPool;

use kitlocker_core::ShirtId;

use super::RepositoryError;
use crate::models::Shirt;

const SHIRT_COLUMNS: &str = "id, team_name, shirt_image, price, description, \
     environmental_impact, extended_description, owner_id";

/// Repository for shirt catalog reads.
pub struct ShirtRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ShirtRepository<'a> {
    /// Create a new shirt repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the whole catalog, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Shirt>, RepositoryError> {
        let shirts = sqlx::query_as::<_, Shirt>(&format!(
            "SELECT {SHIRT_COLUMNS} FROM shirts ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(shirts)
    }

    /// Fetch a single shirt by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ShirtId) -> Result<Option<Shirt>, RepositoryError> {
        let shirt = sqlx::query_as::<_, Shirt>(&format!(
            "SELECT {SHIRT_COLUMNS} FROM shirts WHERE id = $1"
        ))
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(shirt)
    }

    /// Fetch the shirts matching any of the given IDs.
    ///
    /// IDs that no longer resolve are simply absent from the result; callers
    /// resolving a basket rely on that to drop dangling entries.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_many(&self, ids: &[ShirtId]) -> Result<Vec<Shirt>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw_ids: Vec<i32> = ids.iter().map(ShirtId::as_i32).collect();
        let shirts = sqlx::query_as::<_, Shirt>(&format!(
            "SELECT {SHIRT_COLUMNS} FROM shirts WHERE id = ANY($1) ORDER BY id"
        ))
        .bind(raw_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(shirts)
    }
}
