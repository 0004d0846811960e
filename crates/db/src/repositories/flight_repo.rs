//! Repository for the `flights` table.

use skybook_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::flight::{CreateFlight, Flight, UpdateFlight};

const COLUMNS: &str = "id, airline_id, departure_time, arrival_time, origin, destination";

/// Provides CRUD operations for flights.
pub struct FlightRepo;

impl FlightRepo {
    /// Insert a new flight, returning the created row.
    ///
    /// Schedule ordering is not checked here; see
    /// [`skybook_core::flight::validate_schedule`].
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateFlight,
    ) -> Result<Flight, sqlx::Error> {
        let query = format!(
            "INSERT INTO flights (airline_id, departure_time, arrival_time, origin, destination)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Flight>(&query)
            .bind(input.airline_id)
            .bind(input.departure_time)
            .bind(input.arrival_time)
            .bind(&input.origin)
            .bind(&input.destination)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Flight>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flights WHERE id = ?1");
        sqlx::query_as::<_, Flight>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Flight>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flights ORDER BY id");
        sqlx::query_as::<_, Flight>(&query).fetch_all(conn).await
    }

    /// Update a flight. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists. The resulting
    /// schedule is stored as given, without an ordering check.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: DbId,
        input: &UpdateFlight,
    ) -> Result<Option<Flight>, sqlx::Error> {
        let query = format!(
            "UPDATE flights SET
                airline_id = COALESCE(?2, airline_id),
                departure_time = COALESCE(?3, departure_time),
                arrival_time = COALESCE(?4, arrival_time),
                origin = COALESCE(?5, origin),
                destination = COALESCE(?6, destination)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Flight>(&query)
            .bind(id)
            .bind(input.airline_id)
            .bind(input.departure_time)
            .bind(input.arrival_time)
            .bind(&input.origin)
            .bind(&input.destination)
            .fetch_optional(conn)
            .await
    }

    /// Delete a flight by ID. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM flights WHERE id = ?1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
