//! API error type mapped onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::domain::store::StoreError;
use crate::domain::validation::ValidationError;

use super::response::ErrorBody;

/// Errors a handler can return.
///
/// Store misses map to 404 and validation failures to 400; both are normal
/// business outcomes, never a 500.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No record matched the supplied identifier.
    NotFound(StoreError),
    /// The incoming record failed field validation.
    Validation(ValidationError),
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        Self::NotFound(error)
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            Self::NotFound(e) => (StatusCode::NOT_FOUND, e.to_string()),
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
