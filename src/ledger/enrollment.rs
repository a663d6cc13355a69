//! Enrollment rows and student identity.
//!
//! Rows are history-preserving: a drop transitions status to Withdrawn,
//! nothing is ever deleted. At most one Active row may exist per
//! (student, course) pair; the ledger store enforces it as a final guard
//! and the coordinator's locking makes it unreachable in practice.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::CourseId;

/// Stable student identity, supplied by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(Uuid);

impl StudentId {
    pub fn new(id: Uuid) -> Self {
        StudentId(id)
    }

    pub fn random() -> Self {
        StudentId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique id of one enrollment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnrollmentId(Uuid);

impl EnrollmentId {
    pub fn random() -> Self {
        EnrollmentId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for EnrollmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of an enrollment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Active,
    Withdrawn { withdrawn_at: DateTime<Utc> },
}

/// One student-course relationship at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub student: StudentId,
    pub course: CourseId,
    pub enrolled_at: DateTime<Utc>,
    pub status: EnrollmentStatus,
}

impl Enrollment {
    /// Create a fresh Active row.
    pub fn new(student: StudentId, course: CourseId, enrolled_at: DateTime<Utc>) -> Self {
        Enrollment {
            id: EnrollmentId::random(),
            student,
            course,
            enrolled_at,
            status: EnrollmentStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, EnrollmentStatus::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_row_is_active() {
        let row = Enrollment::new(StudentId::random(), CourseId::new("CS101"), Utc::now());
        assert!(row.is_active());
    }

    #[test]
    fn test_withdrawn_row_is_not_active() {
        let mut row = Enrollment::new(StudentId::random(), CourseId::new("CS101"), Utc::now());
        row.status = EnrollmentStatus::Withdrawn {
            withdrawn_at: Utc::now(),
        };
        assert!(!row.is_active());
    }
}
