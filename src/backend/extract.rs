/**
 * Request Extractors
 *
 * Thin wrappers over axum's extractors whose rejections are `BackendError`s,
 * so malformed requests get the same JSON envelope as every other failure.
 */

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

/// `Json<T>` that rejects with a 400 envelope
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> BackendError {
    BackendError::bad_request(format!("Invalid JSON format: {}", rejection.body_text()))
}

/// Parse a numeric path id
pub fn parse_id(raw: &str) -> Result<i64, BackendError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| BackendError::bad_request("invalid id"))
}
