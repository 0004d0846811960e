//! Flight schedule rules.

use crate::error::CoreError;
use crate::types::Timestamp;

/// Message returned when a flight would arrive before (or as) it departs.
pub const ARRIVAL_BEFORE_DEPARTURE_MESSAGE: &str = "Arrival time must be later than departure time";

/// Check that `arrival` is strictly later than `departure`.
///
/// Applied when a flight is created. Updates do not re-run this check.
pub fn validate_schedule(departure: Timestamp, arrival: Timestamp) -> Result<(), CoreError> {
    if departure >= arrival {
        return Err(CoreError::Validation(
            ARRIVAL_BEFORE_DEPARTURE_MESSAGE.to_string(),
        ));
    }
    Ok(())
}
