//! Booking entity model and DTOs.

use serde::{Deserialize, Serialize};
use skybook_core::datetime;
use skybook_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A booking row from the `booking` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub passenger_id: DbId,
    #[serde(serialize_with = "datetime::serialize")]
    pub booking_date: Timestamp,
}

/// DTO for creating a new booking.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub passenger_id: DbId,
    /// Defaults to the current time if omitted.
    #[serde(default, deserialize_with = "datetime::deserialize_option")]
    pub booking_date: Option<Timestamp>,
}

/// DTO for updating an existing booking. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBooking {
    pub passenger_id: Option<DbId>,
    #[serde(default, deserialize_with = "datetime::deserialize_option")]
    pub booking_date: Option<Timestamp>,
}
