//! Handlers for the `/airlines` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use skybook_core::validation::{self, AIRLINE_REQUIRED};
use skybook_db::models::airline::{Airline, CreateAirline, UpdateAirline};
use skybook_db::repositories::AirlineRepo;
use validator::Validate;

use super::not_found;
use crate::error::AppResult;
use crate::extract::{bind, EntityId, JsonBody};
use crate::response::{MessageResponse, RecordResponse};
use crate::state::AppState;

const ENTITY: &str = "Airline";

/// GET /airlines
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Airline>>> {
    let mut conn = state.pool.acquire().await?;
    let airlines = AirlineRepo::list(&mut conn).await?;
    Ok(Json(airlines))
}

/// GET /airlines/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Airline>> {
    let mut conn = state.pool.acquire().await?;
    let airline = AirlineRepo::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| not_found(ENTITY))?;
    Ok(Json(airline))
}

/// POST /airlines
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<(StatusCode, Json<RecordResponse<Airline>>)> {
    validation::require_fields(&body, AIRLINE_REQUIRED)?;
    let input: CreateAirline = bind(body)?;
    input.validate()?;

    let mut tx = skybook_db::begin_write(&state.pool).await?;
    let airline = AirlineRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(airline_id = airline.id, "Airline created");
    Ok((
        StatusCode::CREATED,
        Json(RecordResponse::new("Airline created", airline)),
    ))
}

/// PUT /airlines/{id}
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Json<RecordResponse<Airline>>> {
    let mut tx = skybook_db::begin_write(&state.pool).await?;
    AirlineRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| not_found(ENTITY))?;

    validation::require_object(&body)?;
    let input: UpdateAirline = bind(body)?;
    input.validate()?;

    let airline = AirlineRepo::update(&mut *tx, id, &input)
        .await?
        .ok_or_else(|| not_found(ENTITY))?;
    tx.commit().await?;

    tracing::info!(airline_id = id, "Airline updated");
    Ok(Json(RecordResponse::new("Airline updated", airline)))
}

/// DELETE /airlines/{id}
///
/// Answers 409 while flights still reference the airline.
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<MessageResponse>> {
    let mut tx = skybook_db::begin_write(&state.pool).await?;
    if !AirlineRepo::delete(&mut *tx, id).await? {
        return Err(not_found(ENTITY));
    }
    tx.commit().await?;

    tracing::info!(airline_id = id, "Airline deleted");
    Ok(Json(MessageResponse::new("Airline deleted")))
}
