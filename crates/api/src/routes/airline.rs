//! Route definitions for the `/airlines` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::airline;
use crate::state::AppState;

/// Routes mounted at `/airlines`.
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
        .route("/", get(airline::list).post(airline::create))
        .route(
            "/{id}",
            get(airline::get_by_id)
                .put(airline::update)
                .delete(airline::delete),
        )
}
