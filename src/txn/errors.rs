//! Coordinator-level error type.
//!
//! Everything a caller can observe from an enroll/withdraw operation:
//! a rule rejection, an unknown course, or a fatal invariant violation.

use thiserror::Error;

use crate::catalog::CourseId;
use crate::rules::{RejectReason, Severity};

/// Result type for coordinator operations.
pub type TxnResult<T> = Result<T, EnrollError>;

/// Failure outcomes of one enroll/withdraw operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrollError {
    /// A rule rejected the request; no state changed
    #[error(transparent)]
    Rejected(#[from] RejectReason),

    /// Course id unknown to the catalog
    #[error("course {0} not found")]
    CourseNotFound(CourseId),

    /// Ledger/capacity state diverged; the locking discipline was broken.
    /// Surfaced as an internal failure, never silently corrected.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl EnrollError {
    pub fn invariant(detail: impl Into<String>) -> Self {
        EnrollError::InvariantViolation(detail.into())
    }

    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            EnrollError::Rejected(reason) => reason.code(),
            EnrollError::CourseNotFound(_) => "ENR_COURSE_NOT_FOUND",
            EnrollError::InvariantViolation(_) => "ENR_INVARIANT_VIOLATION",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            EnrollError::Rejected(_) | EnrollError::CourseNotFound(_) => Severity::Reject,
            EnrollError::InvariantViolation(_) => Severity::Fatal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_codes_pass_through() {
        let err = EnrollError::from(RejectReason::CapacityExceeded(CourseId::new("CS101")));
        assert_eq!(err.code(), "ENR_CAPACITY_EXCEEDED");
        assert_eq!(err.severity(), Severity::Reject);
    }

    #[test]
    fn test_invariant_violation_is_fatal() {
        let err = EnrollError::invariant("seat counter underflow");
        assert_eq!(err.code(), "ENR_INVARIANT_VIOLATION");
        assert_eq!(err.severity(), Severity::Fatal);
    }
}
