//! Boundary request types and principal narrowing.
//!
//! The identity provider authenticates callers and hands over a
//! [`Principal`]. The role check happens exactly once, here, producing a
//! [`StudentPrincipal`] the core accepts; no role strings are branched on
//! inside the rules engine.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{CourseId, CourseKind};
use crate::ledger::StudentId;

use super::errors::ApiError;

/// Role attached to an authenticated principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }

    /// Parse the identity provider's role string.
    pub fn parse(text: &str) -> Option<Role> {
        match text {
            "student" => Some(Role::Student),
            "teacher" => Some(Role::Teacher),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated caller as supplied by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub id: Uuid,
    pub role: Role,
}

impl Principal {
    pub fn new(id: Uuid, role: Role) -> Self {
        Principal { id, role }
    }

    /// Narrow to a student capability. The only place roles are checked.
    pub fn into_student(self) -> Result<StudentPrincipal, ApiError> {
        match self.role {
            Role::Student => Ok(StudentPrincipal(StudentId::new(self.id))),
            other => Err(ApiError::ForbiddenRole(other)),
        }
    }
}

/// Proof that the caller holds the student role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentPrincipal(StudentId);

impl StudentPrincipal {
    pub fn student_id(&self) -> StudentId {
        self.0
    }
}

/// Body of `POST /api/enrollments`.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollRequest {
    pub course_id: CourseId,
}

/// Query parameters of `GET /api/courses`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseListQuery {
    /// Case-insensitive substring match on the course name.
    pub search: Option<String>,
    pub kind: Option<CourseKind>,
    pub semester: Option<String>,
}
