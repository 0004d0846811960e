//! Route definitions for the `/flights` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::flight;
use crate::state::AppState;

/// Routes mounted at `/flights`. Same shape as the other resources.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(flight::list).post(flight::create))
        .route(
            "/{id}",
            get(flight::get_by_id)
                .put(flight::update)
                .delete(flight::delete),
        )
}
