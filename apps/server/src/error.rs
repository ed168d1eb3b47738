//! API error mapping for the inbound surface.
//!
//! Validation failures surface as client errors, upstream failures as
//! server errors, and anything internal gets a generic body so no detail
//! leaks past the request boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use quotedock_core::errors::Error as CoreError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Wrapper that maps core errors onto HTTP responses at the boundary.
pub struct ApiError(CoreError);

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            CoreError::InvalidSymbol(_)
            | CoreError::UnsupportedTimeframe(_)
            | CoreError::MissingRequiredParameter(_) => StatusCode::BAD_REQUEST,
            CoreError::EmptyResponse(_) => StatusCode::NOT_FOUND,
            CoreError::Upstream(_) => StatusCode::BAD_GATEWAY,
            CoreError::Database(_) | CoreError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
            match status {
                StatusCode::BAD_GATEWAY => "upstream provider unavailable".to_string(),
                _ => "internal server error".to_string(),
            }
        } else {
            self.0.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
