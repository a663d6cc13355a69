//! Rule rejection taxonomy with stable reason codes.
//!
//! Every rejection carries a distinct machine-readable code so clients
//! can render a precise message ("course full" vs "schedule conflict" vs
//! "already enrolled"). Codes are part of the external contract and must
//! not change.

use std::fmt;

use thiserror::Error;

use crate::catalog::CourseId;

use super::{MAX_LOAD, MIN_LOAD};

/// How a failure is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Request rejected, no state changed, server continues
    Reject,
    /// Coordinator invariant broken; abort the operation and surface as
    /// an internal failure
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// A rule violation that rejects an enroll or drop request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// An active enrollment already exists for this (student, course)
    #[error("already enrolled in {0}")]
    DuplicateEnrollment(CourseId),

    /// Enrolling would exceed the course load ceiling
    #[error("course load limit of {MAX_LOAD} reached (currently {current})")]
    LoadLimitExceeded { current: usize },

    /// No seats left
    #[error("course {0} is full")]
    CapacityExceeded(CourseId),

    /// Candidate course overlaps an actively enrolled course
    #[error("time conflict between {candidate} and {enrolled}")]
    TimeConflict {
        candidate: CourseId,
        enrolled: CourseId,
    },

    /// No active enrollment to drop
    #[error("not enrolled in {0}")]
    NotEnrolled(CourseId),

    /// Dropping would fall below the course load floor
    #[error("cannot drop below minimum load of {MIN_LOAD} (currently {current})")]
    LoadFloorViolation { current: usize },
}

impl RejectReason {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::DuplicateEnrollment(_) => "ENR_DUPLICATE_ENROLLMENT",
            RejectReason::LoadLimitExceeded { .. } => "ENR_LOAD_LIMIT_EXCEEDED",
            RejectReason::CapacityExceeded(_) => "ENR_CAPACITY_EXCEEDED",
            RejectReason::TimeConflict { .. } => "ENR_TIME_CONFLICT",
            RejectReason::NotEnrolled(_) => "ENR_NOT_ENROLLED",
            RejectReason::LoadFloorViolation { .. } => "ENR_LOAD_FLOOR_VIOLATION",
        }
    }

    /// All rule rejections are recoverable at the caller.
    pub fn severity(&self) -> Severity {
        Severity::Reject
    }
}
