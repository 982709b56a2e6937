// --- File: crates/relay_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{HttpStatusCode, RelayError};

// Include the client module
pub mod client;

/// Extension trait for RelayError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for RelayError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Flat error body: every failure kind surfaces as a single message.
        let body = Json(json!({ "message": self.to_string() }));

        (status_code, body).into_response()
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

/// Converts a Result<T, E> to a Result<Json<T>, Response> using a custom
/// error mapper. This is the hook handlers use to log a diagnostic and fold
/// a connector error into the gateway taxonomy in one place.
pub fn map_json_error<T, E, F>(result: Result<T, E>, f: F) -> Result<Json<T>, Response>
where
    T: serde::Serialize,
    F: FnOnce(E) -> RelayError,
{
    result.map(Json).map_err(|err| f(err).into_response())
}
