//! Seat entity model and DTOs.

use serde::{Deserialize, Serialize};
use skybook_core::types::{deserialize_nullable, DbId, Nullable};
use sqlx::FromRow;
use validator::Validate;

/// A seat row from the `seat` table.
///
/// `booking_id` is unique: a booking holds at most one seat.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Seat {
    pub id: DbId,
    pub flight_id: DbId,
    pub seat_number: String,
    pub is_booked: bool,
    pub booking_id: Option<DbId>,
}

/// DTO for creating a new seat.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSeat {
    pub flight_id: DbId,
    #[validate(length(max = 10, message = "must be at most 10 characters"))]
    pub seat_number: String,
    /// Defaults to `false` if omitted.
    pub is_booked: Option<bool>,
    pub booking_id: Option<DbId>,
}

/// DTO for updating an existing seat. All fields are optional.
///
/// `booking_id` is tagged: absent leaves the link alone, `null` clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSeat {
    pub flight_id: Option<DbId>,
    #[validate(length(max = 10, message = "must be at most 10 characters"))]
    pub seat_number: Option<String>,
    pub is_booked: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub booking_id: Nullable<DbId>,
}
