//! Repository for the `passenger` table.

use skybook_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::passenger::{CreatePassenger, Passenger, UpdatePassenger};

const COLUMNS: &str = "id, name, email";

/// Provides CRUD operations for passengers.
pub struct PassengerRepo;

impl PassengerRepo {
    /// Insert a new passenger, returning the created row.
    ///
    /// A duplicate email surfaces as a unique-constraint violation
    /// (`uq_passenger_email`).
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreatePassenger,
    ) -> Result<Passenger, sqlx::Error> {
        let query = format!(
            "INSERT INTO passenger (name, email)
             VALUES (?1, ?2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Passenger>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Passenger>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM passenger WHERE id = ?1");
        sqlx::query_as::<_, Passenger>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Passenger>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM passenger ORDER BY id");
        sqlx::query_as::<_, Passenger>(&query).fetch_all(conn).await
    }

    /// Update a passenger. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: DbId,
        input: &UpdatePassenger,
    ) -> Result<Option<Passenger>, sqlx::Error> {
        let query = format!(
            "UPDATE passenger SET
                name = COALESCE(?2, name),
                email = COALESCE(?3, email)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Passenger>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_optional(conn)
            .await
    }

    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM passenger WHERE id = ?1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
