/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers can return it
 * directly. The body uses the same envelope as successful responses:
 *
 * ```json
 * { "success": false, "error": "title is required", "field": "title" }
 * ```
 *
 * Server-side failures are logged here with their full detail; the client
 * only sees a generic message.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status.as_u16(), self);
        }

        let mut body = json!({
            "success": false,
            "error": self.message(),
        });
        if let Some(field) = self.field() {
            body["field"] = json!(field);
        }

        (status, Json(body)).into_response()
    }
}
