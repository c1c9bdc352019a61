//! JSON error responses for API routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use console_model::{ApiErrorBody, ErrorKind};

use crate::services::auth::AuthError;
use crate::services::content::StoreError;

/// Error returned by every API handler: a status plus `{code, message}`.
#[derive(Debug)]
pub struct ApiError(pub ApiErrorBody);

impl ApiError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self(ApiErrorBody::new(kind, message))
    }

    #[must_use]
    pub fn unauthorized() -> Self {
        Self::new(ErrorKind::Unauthorized, "not signed in")
    }
}

pub(crate) fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Transient => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::Unknown => StatusCode::BAD_GATEWAY,
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::new(err.kind, err.message)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (status_for(self.0.code), Json(self.0)).into_response()
    }
}
