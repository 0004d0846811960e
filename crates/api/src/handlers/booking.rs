//! Handlers for the `/bookings` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use skybook_core::validation::{self, BOOKING_REQUIRED};
use skybook_db::models::booking::{Booking, CreateBooking, UpdateBooking};
use skybook_db::repositories::BookingRepo;

use super::not_found;
use crate::error::AppResult;
use crate::extract::{bind, EntityId, JsonBody};
use crate::response::{MessageResponse, RecordResponse};
use crate::state::AppState;

const ENTITY: &str = "Booking";

/// GET /bookings
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Booking>>> {
    let mut conn = state.pool.acquire().await?;
    let bookings = BookingRepo::list(&mut conn).await?;
    Ok(Json(bookings))
}

/// GET /bookings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Booking>> {
    let mut conn = state.pool.acquire().await?;
    let booking = BookingRepo::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| not_found(ENTITY))?;
    Ok(Json(booking))
}

/// POST /bookings
///
/// `booking_date` defaults to the current time when omitted.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<(StatusCode, Json<RecordResponse<Booking>>)> {
    validation::require_fields(&body, BOOKING_REQUIRED)?;
    let input: CreateBooking = bind(body)?;

    let mut tx = skybook_db::begin_write(&state.pool).await?;
    let booking = BookingRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(
        booking_id = booking.id,
        passenger_id = booking.passenger_id,
        "Booking created"
    );
    Ok((
        StatusCode::CREATED,
        Json(RecordResponse::new("Booking created", booking)),
    ))
}

/// PUT /bookings/{id}
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Json<RecordResponse<Booking>>> {
    let mut tx = skybook_db::begin_write(&state.pool).await?;
    BookingRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| not_found(ENTITY))?;

    validation::require_object(&body)?;
    let input: UpdateBooking = bind(body)?;

    let booking = BookingRepo::update(&mut *tx, id, &input)
        .await?
        .ok_or_else(|| not_found(ENTITY))?;
    tx.commit().await?;

    tracing::info!(booking_id = id, "Booking updated");
    Ok(Json(RecordResponse::new("Booking updated", booking)))
}

/// DELETE /bookings/{id}
///
/// Answers 409 while a seat still holds the booking.
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<MessageResponse>> {
    let mut tx = skybook_db::begin_write(&state.pool).await?;
    if !BookingRepo::delete(&mut *tx, id).await? {
        return Err(not_found(ENTITY));
    }
    tx.commit().await?;

    tracing::info!(booking_id = id, "Booking deleted");
    Ok(Json(MessageResponse::new("Booking deleted")))
}
