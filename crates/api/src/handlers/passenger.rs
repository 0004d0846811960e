//! Handlers for the `/passengers` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use skybook_core::validation::{self, PASSENGER_REQUIRED};
use skybook_db::models::passenger::{CreatePassenger, Passenger, UpdatePassenger};
use skybook_db::repositories::PassengerRepo;
use validator::Validate;

use super::not_found;
use crate::error::AppResult;
use crate::extract::{bind, EntityId, JsonBody};
use crate::response::{MessageResponse, RecordResponse};
use crate::state::AppState;

const ENTITY: &str = "Passenger";

/// GET /passengers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Passenger>>> {
    let mut conn = state.pool.acquire().await?;
    let passengers = PassengerRepo::list(&mut conn).await?;
    Ok(Json(passengers))
}

/// GET /passengers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Passenger>> {
    let mut conn = state.pool.acquire().await?;
    let passenger = PassengerRepo::find_by_id(&mut conn, id)
        .await?
        .ok_or_else(|| not_found(ENTITY))?;
    Ok(Json(passenger))
}

/// POST /passengers
///
/// A duplicate email answers 409.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<(StatusCode, Json<RecordResponse<Passenger>>)> {
    validation::require_fields(&body, PASSENGER_REQUIRED)?;
    let input: CreatePassenger = bind(body)?;
    input.validate()?;

    let mut tx = skybook_db::begin_write(&state.pool).await?;
    let passenger = PassengerRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(passenger_id = passenger.id, "Passenger created");
    Ok((
        StatusCode::CREATED,
        Json(RecordResponse::new("Passenger created", passenger)),
    ))
}

/// PUT /passengers/{id}
pub async fn update(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Json<RecordResponse<Passenger>>> {
    let mut tx = skybook_db::begin_write(&state.pool).await?;
    PassengerRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| not_found(ENTITY))?;

    validation::require_object(&body)?;
    let input: UpdatePassenger = bind(body)?;
    input.validate()?;

    let passenger = PassengerRepo::update(&mut *tx, id, &input)
        .await?
        .ok_or_else(|| not_found(ENTITY))?;
    tx.commit().await?;

    tracing::info!(passenger_id = id, "Passenger updated");
    Ok(Json(RecordResponse::new("Passenger updated", passenger)))
}

/// DELETE /passengers/{id}
pub async fn delete(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<MessageResponse>> {
    let mut tx = skybook_db::begin_write(&state.pool).await?;
    if !PassengerRepo::delete(&mut *tx, id).await? {
        return Err(not_found(ENTITY));
    }
    tx.commit().await?;

    tracing::info!(passenger_id = id, "Passenger deleted");
    Ok(Json(MessageResponse::new("Passenger deleted")))
}
