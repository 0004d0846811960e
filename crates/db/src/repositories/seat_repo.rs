//! Repository for the `seat` table.

use skybook_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::seat::{CreateSeat, Seat, UpdateSeat};

const COLUMNS: &str = "id, flight_id, seat_number, is_booked, booking_id";

/// Provides CRUD operations for seats.
pub struct SeatRepo;

impl SeatRepo {
    /// Insert a new seat, returning the created row.
    ///
    /// `is_booked` defaults to `false`. Reusing a `booking_id` already held
    /// by another seat surfaces as a unique-constraint violation
    /// (`uq_seat_booking_id`).
    pub async fn create(conn: &mut SqliteConnection, input: &CreateSeat) -> Result<Seat, sqlx::Error> {
        let query = format!(
            "INSERT INTO seat (flight_id, seat_number, is_booked, booking_id)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Seat>(&query)
            .bind(input.flight_id)
            .bind(&input.seat_number)
            .bind(input.is_booked.unwrap_or(false))
            .bind(input.booking_id)
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Seat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seat WHERE id = ?1");
        sqlx::query_as::<_, Seat>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Seat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seat ORDER BY id");
        sqlx::query_as::<_, Seat>(&query).fetch_all(conn).await
    }

    /// Update a seat. Only fields present in `input` are applied.
    ///
    /// `booking_id` is a tagged nullable, so `Some(None)` clears the link
    /// while `None` leaves it untouched. Returns `None` if no row with the
    /// given `id` exists.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: DbId,
        input: &UpdateSeat,
    ) -> Result<Option<Seat>, sqlx::Error> {
        let query = format!(
            "UPDATE seat SET
                flight_id = COALESCE(?2, flight_id),
                seat_number = COALESCE(?3, seat_number),
                is_booked = COALESCE(?4, is_booked),
                booking_id = CASE WHEN ?5 THEN ?6 ELSE booking_id END
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Seat>(&query)
            .bind(id)
            .bind(input.flight_id)
            .bind(&input.seat_number)
            .bind(input.is_booked)
            .bind(input.booking_id.is_some())
            .bind(input.booking_id.flatten())
            .fetch_optional(conn)
            .await
    }

    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM seat WHERE id = ?1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
