//! Repository for the `airline` table.

use skybook_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::airline::{Airline, CreateAirline, UpdateAirline};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, country";

/// Provides CRUD operations for airlines.
pub struct AirlineRepo;

impl AirlineRepo {
    /// Insert a new airline, returning the created row.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateAirline,
    ) -> Result<Airline, sqlx::Error> {
        let query = format!(
            "INSERT INTO airline (name, country)
             VALUES (?1, ?2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Airline>(&query)
            .bind(&input.name)
            .bind(&input.country)
            .fetch_one(conn)
            .await
    }

    /// Find an airline by its ID.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Airline>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM airline WHERE id = ?1");
        sqlx::query_as::<_, Airline>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List all airlines in insertion order.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Airline>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM airline ORDER BY id");
        sqlx::query_as::<_, Airline>(&query).fetch_all(conn).await
    }

    /// Update an airline. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: DbId,
        input: &UpdateAirline,
    ) -> Result<Option<Airline>, sqlx::Error> {
        let query = format!(
            "UPDATE airline SET
                name = COALESCE(?2, name),
                country = COALESCE(?3, country)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Airline>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.country)
            .fetch_optional(conn)
            .await
    }

    /// Delete an airline by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while flights still reference it.
    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM airline WHERE id = ?1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
