//! Weekly time slots and overlap testing.
//!
//! A slot is a half-open interval `[start, end)` on one day of the week.
//! Two slots conflict iff they fall on the same day and their intervals
//! overlap; touching boundaries (back-to-back classes) do not conflict.

use serde::{Deserialize, Serialize};

use super::time::{DayOfWeek, TimeError, TimeOfDay};

/// One weekly meeting of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Day the meeting occurs on (wire format 1..=7).
    pub day: DayOfWeek,
    /// Start of the half-open interval.
    pub start: TimeOfDay,
    /// End of the half-open interval (exclusive).
    pub end: TimeOfDay,
    /// Room or building, display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl TimeSlot {
    /// Create a slot, enforcing `start < end`.
    pub fn new(day: DayOfWeek, start: TimeOfDay, end: TimeOfDay) -> Result<Self, TimeError> {
        let slot = TimeSlot {
            day,
            start,
            end,
            location: None,
        };
        slot.validate()?;
        Ok(slot)
    }

    /// Check the interval invariant. Deserialized slots must pass through
    /// here before entering the catalog.
    pub fn validate(&self) -> Result<(), TimeError> {
        if self.start >= self.end {
            return Err(TimeError::EmptyInterval {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// True iff the two slots share a day and their half-open intervals
    /// overlap. `a.end == b.start` does not conflict.
    pub fn conflicts_with(&self, other: &TimeSlot) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

/// True iff any slot in `a` conflicts with any slot in `b`.
///
/// Pure, O(|a|·|b|). Symmetric: `conflicts(a, b) == conflicts(b, a)`.
pub fn conflicts(a: &[TimeSlot], b: &[TimeSlot]) -> bool {
    a.iter().any(|sa| b.iter().any(|sb| sa.conflicts_with(sb)))
}
