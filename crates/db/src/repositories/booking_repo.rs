//! Repository for the `booking` table.

use skybook_core::datetime;
use skybook_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::booking::{Booking, CreateBooking, UpdateBooking};

const COLUMNS: &str = "id, passenger_id, booking_date";

/// Provides CRUD operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking, returning the created row.
    ///
    /// If `booking_date` is `None` in the input, the current time is used.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateBooking,
    ) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO booking (passenger_id, booking_date)
             VALUES (?1, ?2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.passenger_id)
            .bind(input.booking_date.unwrap_or_else(datetime::now))
            .fetch_one(conn)
            .await
    }

    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM booking WHERE id = ?1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM booking ORDER BY id");
        sqlx::query_as::<_, Booking>(&query).fetch_all(conn).await
    }

    /// Update a booking. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: DbId,
        input: &UpdateBooking,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE booking SET
                passenger_id = COALESCE(?2, passenger_id),
                booking_date = COALESCE(?3, booking_date)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(input.passenger_id)
            .bind(input.booking_date)
            .fetch_optional(conn)
            .await
    }

    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM booking WHERE id = ?1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
