//! # API Errors
//!
//! Maps core outcomes to transport-level responses. Every rejection
//! reason keeps its distinct, stable code so clients can branch on it.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::rules::RejectReason;
use crate::txn::EnrollError;

use super::request::Role;

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// API-level errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Core outcome (rule rejection, unknown course, invariant failure)
    #[error(transparent)]
    Enroll(#[from] EnrollError),

    /// Caller is authenticated but not a student
    #[error("enrollment requires the student role, caller is {0}")]
    ForbiddenRole(Role),

    /// No caller identity supplied
    #[error("missing X-Student-Id header")]
    MissingStudentHeader,

    /// Caller identity is not a valid id
    #[error("malformed X-Student-Id header")]
    InvalidStudentHeader,

    /// Role header value is not a known role
    #[error("unknown role {0:?}")]
    UnknownRole(String),
}

impl From<RejectReason> for ApiError {
    fn from(reason: RejectReason) -> Self {
        ApiError::Enroll(EnrollError::from(reason))
    }
}

impl ApiError {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Enroll(err) => err.code(),
            ApiError::ForbiddenRole(_) => "ENR_FORBIDDEN_ROLE",
            ApiError::MissingStudentHeader | ApiError::InvalidStudentHeader => {
                "ENR_INVALID_PRINCIPAL"
            }
            ApiError::UnknownRole(_) => "ENR_UNKNOWN_ROLE",
        }
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Enroll(EnrollError::Rejected(reason)) => match reason {
                RejectReason::DuplicateEnrollment(_)
                | RejectReason::CapacityExceeded(_)
                | RejectReason::TimeConflict { .. } => StatusCode::CONFLICT,
                RejectReason::LoadLimitExceeded { .. }
                | RejectReason::LoadFloorViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                RejectReason::NotEnrolled(_) => StatusCode::NOT_FOUND,
            },
            ApiError::Enroll(EnrollError::CourseNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Enroll(EnrollError::InvariantViolation(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::ForbiddenRole(_) => StatusCode::FORBIDDEN,
            ApiError::MissingStudentHeader
            | ApiError::InvalidStudentHeader
            | ApiError::UnknownRole(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    pub status: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        ErrorResponse {
            error: err.to_string(),
            code: err.code(),
            status: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
