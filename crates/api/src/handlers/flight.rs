//! Handlers for the `/flights` resource.
//!
//! Creation checks that the flight arrives after it departs. Updates apply
//! the given fields as-is and do not repeat that check.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use skybook_core::flight::validate_schedule;
use skybook_core::validation::{self, FLIGHT_REQUIRED};
use skybook_db::models::flight::{CreateFlight, Flight, UpdateFlight};
use skybook_db::repositories::FlightRepo;
use validator::Validate;

use super::not_found;
use crate::error::AppResult;
use crate::extract::{bind, EntityId, JsonBody};
use crate::response::{MessageResponse, RecordResponse};
use crate::state::AppState;

const ENTITY: &str = "Flight";

/// GET /flights
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Flight>>> {
    let mut conn = state.pool.acquire().await?;
    let flights = FlightRepo::list(&mut conn).await?;
    Ok(Json(flights))
}

/// GET /flights/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Flight>> {
    let mut conn = state.pool.acquire().await?;
    let flight = FlightRepo::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| not_found(ENTITY))?;
    Ok(Json(flight))
}

/// POST /flights
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<(StatusCode, Json<RecordResponse<Flight>>)> {
    validation::require_fields(&body, FLIGHT_REQUIRED)?;
    let input: CreateFlight = bind(body)?;
    validate_schedule(input.departure_time, input.arrival_time)?;
    input.validate()?;

    let mut tx = skybook_db::begin_write(&state.pool).await?;
    let flight = FlightRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(
        flight_id = flight.id,
        airline_id = flight.airline_id,
        "Flight created"
    );
    Ok((
        StatusCode::CREATED,
        Json(RecordResponse::new("Flight created", flight)),
    ))
}

/// PUT /flights/{id}
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Json<RecordResponse<Flight>>> {
    let mut tx = skybook_db::begin_write(&state.pool).await?;
    FlightRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| not_found(ENTITY))?;

    validation::require_object(&body)?;
    let input: UpdateFlight = bind(body)?;
    input.validate()?;

    let flight = FlightRepo::update(&mut *tx, id, &input)
        .await?
        .ok_or_else(|| not_found(ENTITY))?;
    tx.commit().await?;

    tracing::info!(flight_id = id, "Flight updated");
    Ok(Json(RecordResponse::new("Flight updated", flight)))
}

/// DELETE /flights/{id}
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<MessageResponse>> {
    let mut tx = skybook_db::begin_write(&state.pool).await?;
    if !FlightRepo::delete(&mut *tx, id).await? {
        return Err(not_found(ENTITY));
    }
    tx.commit().await?;

    tracing::info!(flight_id = id, "Flight deleted");
    Ok(Json(MessageResponse::new("Flight deleted")))
}
