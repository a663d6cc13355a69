//! Caller identity extraction.
//!
//! A stand-in for the identity provider boundary: the authenticated
//! student id arrives in `X-Student-Id` and the role in `X-Role`
//! (defaulting to student). Narrowing to [`StudentPrincipal`] happens
//! here, once, before any handler runs.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::api::{ApiError, Principal, Role, StudentPrincipal};

/// Header carrying the authenticated caller id.
pub const STUDENT_ID_HEADER: &str = "x-student-id";

/// Header carrying the caller role; absent means student.
pub const ROLE_HEADER: &str = "x-role";

#[async_trait]
impl<S> FromRequestParts<S> for StudentPrincipal
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw_id = parts
            .headers
            .get(STUDENT_ID_HEADER)
            .ok_or(ApiError::MissingStudentHeader)?
            .to_str()
            .map_err(|_| ApiError::InvalidStudentHeader)?;
        let id = Uuid::parse_str(raw_id).map_err(|_| ApiError::InvalidStudentHeader)?;

        let role = match parts.headers.get(ROLE_HEADER) {
            None => Role::Student,
            Some(value) => {
                let text = value.to_str().map_err(|_| ApiError::InvalidStudentHeader)?;
                Role::parse(text).ok_or_else(|| ApiError::UnknownRole(text.to_string()))?
            }
        };

        Principal::new(id, role).into_student()
    }
}
