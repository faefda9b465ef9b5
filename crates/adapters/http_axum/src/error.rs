//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use mergington_domain::error::MergingtonError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Maps [`MergingtonError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(MergingtonError);

impl From<MergingtonError> for ApiError {
    fn from(err: MergingtonError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            MergingtonError::NotFound(_) => StatusCode::NOT_FOUND,
            MergingtonError::Conflict(_) | MergingtonError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
        };
        let detail = self.0.to_string();
        tracing::debug!(status = status.as_u16(), %detail, "request rejected");

        (status, Json(ErrorBody { detail })).into_response()
    }
}
