use axum::routing::get;
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

/// Booking CRUD, mounted at `/bookings`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(booking::list).post(booking::create))
        .route(
            "/{id}",
            get(booking::get_by_id)
                .put(booking::update)
                .delete(booking::delete),
        )
}
