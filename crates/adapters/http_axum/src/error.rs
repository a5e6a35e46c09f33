//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use eventboard_domain::error::EventBoardError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`EventBoardError`] to an HTTP response with the appropriate
/// status code. Storage detail stays in the server log.
pub struct ApiError(EventBoardError);

impl From<EventBoardError> for ApiError {
    fn from(err: EventBoardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            EventBoardError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            EventBoardError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            EventBoardError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
