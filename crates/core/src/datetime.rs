//! Timestamp parsing and rendering in the API's wire format.
//!
//! Every timestamp crossing the HTTP boundary uses `YYYY-MM-DDTHH:MM:SS`
//! with no fractional seconds and no zone.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::CoreError;
use crate::types::Timestamp;

/// `chrono` format string for wire timestamps.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Message returned whenever a timestamp string fails to parse.
pub const INVALID_DATETIME_MESSAGE: &str = "Invalid datetime format. Use YYYY-MM-DDTHH:MM:SS";

/// Parse a wire timestamp.
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, CoreError> {
    NaiveDateTime::parse_from_str(raw, WIRE_FORMAT)
        .map_err(|_| CoreError::Validation(INVALID_DATETIME_MESSAGE.to_string()))
}

/// Parse an optional wire timestamp, passing `None` through.
pub fn parse_optional_timestamp(raw: Option<&str>) -> Result<Option<Timestamp>, CoreError> {
    raw.map(parse_timestamp).transpose()
}

/// Render a timestamp in wire format.
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.format(WIRE_FORMAT).to_string()
}

/// The current UTC wall-clock time truncated to whole seconds, so it
/// round-trips through the wire format unchanged.
pub fn now() -> Timestamp {
    let now = chrono::Utc::now().naive_utc();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Serde `serialize_with` adapter for timestamp fields on response models.
pub fn serialize<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(ts))
}

/// Serde `deserialize_with` adapter for required timestamp fields on request DTOs.
///
/// Fails with [`INVALID_DATETIME_MESSAGE`] so the message reaches the client
/// unchanged.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(|_| serde::de::Error::custom(INVALID_DATETIME_MESSAGE))
}

/// Like [`deserialize`], for optional fields. `null` becomes `None`; pair with
/// `#[serde(default)]` so a missing key does too.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    parse_optional_timestamp(raw.as_deref())
        .map_err(|_| serde::de::Error::custom(INVALID_DATETIME_MESSAGE))
}
