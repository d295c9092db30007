//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use buildhub_domain::error::BuildingError;

/// JSON error body returned by API endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Invalid floor id")]
    pub detail: String,
}

/// Maps [`BuildingError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(BuildingError);

impl From<BuildingError> for ApiError {
    fn from(err: BuildingError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Status code reported for the wrapped error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BuildingError::InvalidFloorId { .. } | BuildingError::DuplicateDeviceId { .. } => {
                StatusCode::BAD_REQUEST
            }
            BuildingError::DeviceNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            detail: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
