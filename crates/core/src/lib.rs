//! Domain building blocks shared by the database and API layers.
//!
//! Nothing in this crate performs I/O: it holds the error type, the id and
//! timestamp aliases, and the validation rules applied to request bodies.

pub mod datetime;
pub mod error;
pub mod flight;
pub mod types;
pub mod validation;
