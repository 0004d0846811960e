//! Shared response envelope types for API handlers.
//!
//! Write endpoints answer with a `message` next to the affected record's
//! fields, e.g. `{"message": "Airline created", "id": 1, "name": ...}`.

use serde::Serialize;

/// A confirmation message alone, used by delete and the index route.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// A confirmation message with the record's fields flattened alongside.
///
/// # Example
///
/// ```ignore
/// Ok((StatusCode::CREATED, Json(RecordResponse::new("Airline created", airline))))
/// ```
#[derive(Debug, Serialize)]
pub struct RecordResponse<T: Serialize> {
    pub message: &'static str,
    #[serde(flatten)]
    pub record: T,
}

impl<T: Serialize> RecordResponse<T> {
    pub fn new(message: &'static str, record: T) -> Self {
        Self { message, record }
    }
}
