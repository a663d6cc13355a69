//! Capacity tracker errors.

use thiserror::Error;

use crate::catalog::CourseId;

/// Errors from course-level seat accounting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapacityError {
    /// Course was never registered with the tracker
    #[error("course {0} has no seat counter")]
    UnknownCourse(CourseId),

    /// All seats taken
    #[error("course {0} is full")]
    Exhausted(CourseId),

    /// Release with zero seats taken; indicates a coordinator bug
    #[error("seat release underflow for course {0}")]
    Underflow(CourseId),
}
