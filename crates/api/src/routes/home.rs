use axum::{routing::get, Json, Router};

use crate::response::MessageResponse;
use crate::state::AppState;

/// GET / -- greeting.
async fn index() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the Airline Management API"))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
