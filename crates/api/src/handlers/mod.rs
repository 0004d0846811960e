//! Request handlers for the airline resources.
//!
//! Each submodule provides async handler functions (list, get_by_id, create,
//! update, delete) for a single entity type. Reads use a pooled connection;
//! every write runs in its own transaction, committed on success and rolled
//! back when dropped on any error path. Errors map through [`AppError`].

use skybook_core::error::CoreError;

use crate::error::AppError;

pub mod airline;
pub mod booking;
pub mod flight;
pub mod passenger;
pub mod seat;

/// Build the 404 error for a missing row of `entity`.
pub(crate) fn not_found(entity: &'static str) -> AppError {
    AppError::Core(CoreError::NotFound { entity })
}
