//! Cafe repository for database operations.
//!
//! All queries are runtime-checked `query_as`/`query` calls against the
//! single `cafes` table. Lookups return `Option` so callers must handle the
//! absent case explicitly before mutating.

use sqlx::SqlitePool;

use cafe_registry_core::CafeId;

use super::RepositoryError;
use crate::models::{Cafe, CafeDraft};

/// Repository for cafe database operations.
pub struct CafeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CafeRepository<'a> {
    /// Create a new cafe repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get every cafe, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Cafe>, RepositoryError> {
        let cafes = sqlx::query_as::<_, Cafe>(
            r"
            SELECT id, name, map_url, img_url, location, seats,
                   has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
            FROM cafes
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(cafes)
    }

    /// Get a cafe by its ID. Absent is a valid outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: CafeId) -> Result<Option<Cafe>, RepositoryError> {
        let cafe = sqlx::query_as::<_, Cafe>(
            r"
            SELECT id, name, map_url, img_url, location, seats,
                   has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price
            FROM cafes
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(cafe)
    }

    /// Insert a new cafe and return its store-assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the name already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert(&self, draft: &CafeDraft) -> Result<CafeId, RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO cafes (name, map_url, img_url, location, seats,
                               has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ",
        )
        .bind(&draft.name)
        .bind(&draft.map_url)
        .bind(&draft.img_url)
        .bind(&draft.location)
        .bind(draft.seats)
        .bind(draft.has_toilet)
        .bind(draft.has_wifi)
        .bind(draft.has_sockets)
        .bind(draft.can_take_calls)
        .bind(&draft.coffee_price)
        .execute(self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(CafeId::new(result.last_insert_rowid()))
    }

    /// Overwrite all mutable fields of the cafe identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has that ID.
    /// Returns `RepositoryError::Conflict` if the new name already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(&self, id: CafeId, draft: &CafeDraft) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE cafes
            SET name = ?1, map_url = ?2, img_url = ?3, location = ?4, seats = ?5,
                has_toilet = ?6, has_wifi = ?7, has_sockets = ?8,
                can_take_calls = ?9, coffee_price = ?10
            WHERE id = ?11
            ",
        )
        .bind(&draft.name)
        .bind(&draft.map_url)
        .bind(&draft.img_url)
        .bind(&draft.location)
        .bind(draft.seats)
        .bind(draft.has_toilet)
        .bind(draft.has_wifi)
        .bind(draft.has_sockets)
        .bind(draft.can_take_calls)
        .bind(&draft.coffee_price)
        .bind(id)
        .execute(self.pool)
        .await
        .map_err(map_unique_violation)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete the cafe identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has that ID.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: CafeId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM cafes WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Map the driver's unique-constraint violation to `Conflict`; `name` is the
/// only unique column besides the primary key.
fn map_unique_violation(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::Conflict(db_err.message().to_string())
        }
        _ => RepositoryError::Database(err),
    }
}
