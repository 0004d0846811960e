//! Request extractors that reject with [`AppError`] so every failure,
//! including malformed input, answers with the standard JSON error body.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;
use skybook_core::error::CoreError;
use skybook_core::types::DbId;

use crate::error::{AppError, AppResult};

/// JSON request body.
///
/// Behaves like [`Json`], but a missing content type, an empty body or
/// invalid JSON all answer 400 instead of axum's 415/422 split.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// The numeric `{id}` segment of a resource path.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub DbId);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest("Resource id must be an integer".into()))?;
        Ok(Self(id))
    }
}

/// Bind a raw JSON body to a typed DTO.
///
/// Type mismatches and unparseable timestamps become validation errors
/// carrying serde's message (e.g. the datetime format hint).
pub fn bind<T: DeserializeOwned>(body: Value) -> AppResult<T> {
    serde_json::from_value(body).map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))
}
