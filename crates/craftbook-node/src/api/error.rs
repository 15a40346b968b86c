//! Translation of engine errors into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use craftbook_core::CraftError;
use serde::Serialize;

/// Error body returned to callers.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    pub subject: Option<String>,
}

/// An engine error on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub CraftError);

impl ApiError {
    /// HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match self.0 {
            CraftError::NotFound { .. } => StatusCode::NOT_FOUND,
            CraftError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            CraftError::EmptyCatalog => StatusCode::SERVICE_UNAVAILABLE,
            CraftError::TimeOverflow => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CraftError> for ApiError {
    fn from(err: CraftError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.0.kind(),
            message: self.0.to_string(),
            subject: self.0.subject().map(str::to_string),
        };
        (status, Json(body)).into_response()
    }
}
