//! Route definitions for the `/seats` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::seat;
use crate::state::AppState;

/// Routes mounted at `/seats`.
///
/// Seats are usually created alongside a flight, but the per-id routes let
/// clients book or release an individual seat.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(seat::list).post(seat::create))
        .route(
            "/{id}",
            get(seat::get_by_id)
                .put(seat::update)
                .delete(seat::delete),
        )
}
