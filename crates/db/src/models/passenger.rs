//! Passenger entity model and DTOs.

use serde::{Deserialize, Serialize};
use skybook_core::types::DbId;
use sqlx::FromRow;
use validator::Validate;

/// A passenger row from the `passenger` table. `email` is unique.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Passenger {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

/// DTO for creating a new passenger.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePassenger {
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub name: String,
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub email: String,
}

/// DTO for updating an existing passenger. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePassenger {
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub email: Option<String>,
}
