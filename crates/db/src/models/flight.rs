//! Flight entity model and DTOs.
//!
//! Timestamps are bound from `YYYY-MM-DDTHH:MM:SS` strings on the way in and
//! rendered in the same format on the way out.

use serde::{Deserialize, Serialize};
use skybook_core::datetime;
use skybook_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::Validate;

/// A flight row from the `flights` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Flight {
    pub id: DbId,
    pub airline_id: DbId,
    #[serde(serialize_with = "datetime::serialize")]
    pub departure_time: Timestamp,
    #[serde(serialize_with = "datetime::serialize")]
    pub arrival_time: Timestamp,
    pub origin: String,
    pub destination: String,
}

/// DTO for creating a new flight.
///
/// The departure/arrival ordering is checked by the caller via
/// [`skybook_core::flight::validate_schedule`] before insert.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFlight {
    pub airline_id: DbId,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub departure_time: Timestamp,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub arrival_time: Timestamp,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub origin: String,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub destination: String,
}

/// DTO for updating an existing flight. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFlight {
    pub airline_id: Option<DbId>,
    #[serde(default, deserialize_with = "datetime::deserialize_option")]
    pub departure_time: Option<Timestamp>,
    #[serde(default, deserialize_with = "datetime::deserialize_option")]
    pub arrival_time: Option<Timestamp>,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub origin: Option<String>,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub destination: Option<String>,
}
