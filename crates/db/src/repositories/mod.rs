//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&mut SqliteConnection` as the first argument. Callers pass either
//! a pooled connection or an open transaction (`&mut *tx`), which keeps the
//! commit/rollback decision with the caller.

pub mod airline_repo;
pub mod booking_repo;
pub mod flight_repo;
pub mod passenger_repo;
pub mod seat_repo;

pub use airline_repo::AirlineRepo;
pub use booking_repo::BookingRepo;
pub use flight_repo::FlightRepo;
pub use passenger_repo::PassengerRepo;
pub use seat_repo::SeatRepo;
