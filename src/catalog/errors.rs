//! Catalog loading errors.

use thiserror::Error;

use crate::schedule::TimeError;

use super::course::CourseId;

/// Errors from loading or validating catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid JSON
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two courses share one course code
    #[error("duplicate course id {0}")]
    DuplicateCourse(CourseId),

    /// Capacity below 1
    #[error("course {0} must have capacity >= 1")]
    InvalidCapacity(CourseId),

    /// A time slot violates its interval invariant
    #[error("course {course} has an invalid time slot: {source}")]
    InvalidSlot {
        course: CourseId,
        source: TimeError,
    },
}
