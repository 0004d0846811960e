//! Request-body presence checks.
//!
//! Bodies arrive as raw JSON so that missing fields can be reported by name
//! before the body is bound to a typed DTO.

use serde_json::Value;

use crate::error::CoreError;

/// Required fields for creating an airline.
pub const AIRLINE_REQUIRED: &[&str] = &["name", "country"];

/// Required fields for creating a flight.
pub const FLIGHT_REQUIRED: &[&str] = &[
    "airline_id",
    "departure_time",
    "arrival_time",
    "origin",
    "destination",
];

/// Required fields for creating a passenger.
pub const PASSENGER_REQUIRED: &[&str] = &["name", "email"];

/// Required fields for creating a booking. `booking_date` defaults to now.
pub const BOOKING_REQUIRED: &[&str] = &["passenger_id"];

/// Required fields for creating a seat. `is_booked` defaults to false and
/// `booking_id` may be omitted.
pub const SEAT_REQUIRED: &[&str] = &["flight_id", "seat_number"];

/// Ensure `body` is a JSON object.
pub fn require_object(body: &Value) -> Result<(), CoreError> {
    if body.is_object() {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Request body must be a JSON object".to_string(),
        ))
    }
}

/// Ensure `body` is an object carrying a non-null value for every field
/// in `required`. The error lists every missing field in declaration order.
pub fn require_fields(body: &Value, required: &[&str]) -> Result<(), CoreError> {
    require_object(body)?;

    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|field| body.get(field).map_or(true, Value::is_null))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}
