//! Airline entity model and DTOs.

use serde::{Deserialize, Serialize};
use skybook_core::types::DbId;
use sqlx::FromRow;
use validator::Validate;

/// An airline row from the `airline` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Airline {
    pub id: DbId,
    pub name: String,
    pub country: String,
}

/// DTO for creating a new airline.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAirline {
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub name: String,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub country: String,
}

/// DTO for updating an existing airline. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAirline {
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub country: Option<String>,
}
