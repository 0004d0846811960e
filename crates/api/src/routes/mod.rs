pub mod airline;
pub mod booking;
pub mod flight;
pub mod health;
pub mod home;
pub mod passenger;
pub mod seat;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /airlines                 list, create
/// /airlines/{id}            get, update, delete
///
/// /flights                  list, create
/// /flights/{id}             get, update, delete
///
/// /passengers               list, create
/// /passengers/{id}          get, update, delete
///
/// /bookings                 list, create
/// /bookings/{id}            get, update, delete
///
/// /seats                    list, create
/// /seats/{id}               get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/airlines", airline::router())
        .nest("/flights", flight::router())
        .nest("/passengers", passenger::router())
        .nest("/bookings", booking::router())
        .nest("/seats", seat::router())
}
