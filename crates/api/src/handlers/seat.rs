//! Handlers for the `/seats` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use skybook_core::validation::{self, SEAT_REQUIRED};
use skybook_db::models::seat::{CreateSeat, Seat, UpdateSeat};
use skybook_db::repositories::SeatRepo;
use validator::Validate;

use super::not_found;
use crate::error::AppResult;
use crate::extract::{bind, EntityId, JsonBody};
use crate::response::{MessageResponse, RecordResponse};
use crate::state::AppState;

const ENTITY: &str = "Seat";

/// GET /seats
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Seat>>> {
    let mut conn = state.pool.acquire().await?;
    let seats = SeatRepo::list(&mut conn).await?;
    Ok(Json(seats))
}

/// GET /seats/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Seat>> {
    let mut conn = state.pool.acquire().await?;
    let seat = SeatRepo::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| not_found(ENTITY))?;
    Ok(Json(seat))
}

/// POST /seats
///
/// Attaching a booking that already holds a seat answers 409.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<(StatusCode, Json<RecordResponse<Seat>>)> {
    validation::require_fields(&body, SEAT_REQUIRED)?;
    let input: CreateSeat = bind(body)?;
    input.validate()?;

    let mut tx = skybook_db::begin_write(&state.pool).await?;
    let seat = SeatRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(seat_id = seat.id, flight_id = seat.flight_id, "Seat created");
    Ok((
        StatusCode::CREATED,
        Json(RecordResponse::new("Seat created", seat)),
    ))
}

/// PUT /seats/{id}
///
/// `"booking_id": null` detaches the seat from its booking.
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Json<RecordResponse<Seat>>> {
    let mut tx = skybook_db::begin_write(&state.pool).await?;
    SeatRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| not_found(ENTITY))?;

    validation::require_object(&body)?;
    let input: UpdateSeat = bind(body)?;
    input.validate()?;

    let seat = SeatRepo::update(&mut *tx, id, &input)
        .await?
        .ok_or_else(|| not_found(ENTITY))?;
    tx.commit().await?;

    tracing::info!(seat_id = id, "Seat updated");
    Ok(Json(RecordResponse::new("Seat updated", seat)))
}

/// DELETE /seats/{id}
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<MessageResponse>> {
    let mut tx = skybook_db::begin_write(&state.pool).await?;
    if !SeatRepo::delete(&mut *tx, id).await? {
        return Err(not_found(ENTITY));
    }
    tx.commit().await?;

    tracing::info!(seat_id = id, "Seat deleted");
    Ok(Json(MessageResponse::new("Seat deleted")))
}
