//! Course records as supplied by the catalog collaborator.
//!
//! The core never creates or edits courses; it reads them. Only `id`,
//! `capacity` and `slots` feed enrollment rules, the remaining fields are
//! carried for display.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schedule::TimeSlot;

use super::errors::CatalogError;

/// Unique course code, e.g. `"CS101"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    pub fn new(code: impl Into<String>) -> Self {
        CourseId(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CourseId {
    fn from(code: &str) -> Self {
        CourseId::new(code)
    }
}

/// Whether a course is part of the required curriculum.
///
/// Informs display only; no enrollment rule reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseKind {
    Required,
    Elective,
}

/// One course offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub kind: CourseKind,
    /// Maximum simultaneous active enrollments. Must be >= 1.
    pub capacity: u32,
    #[serde(default)]
    pub credits: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Weekly meetings, half-open intervals.
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
}

impl Course {
    /// Validate a deserialized record before it enters the catalog.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.capacity == 0 {
            return Err(CatalogError::InvalidCapacity(self.id.clone()));
        }
        for slot in &self.slots {
            slot.validate().map_err(|source| CatalogError::InvalidSlot {
                course: self.id.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{DayOfWeek, TimeOfDay};

    fn course(capacity: u32) -> Course {
        Course {
            id: CourseId::new("CS101"),
            name: "Intro".to_string(),
            kind: CourseKind::Required,
            capacity,
            credits: 3,
            semester: None,
            description: String::new(),
            slots: vec![],
        }
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            course(0).validate(),
            Err(CatalogError::InvalidCapacity(_))
        ));
        assert!(course(1).validate().is_ok());
    }

    #[test]
    fn test_bad_slot_rejected() {
        let mut c = course(10);
        let ten = TimeOfDay::new(10, 0).unwrap();
        // Bypass the constructor to simulate a raw deserialized slot.
        c.slots.push(TimeSlot {
            day: DayOfWeek::Monday,
            start: ten,
            end: ten,
            location: None,
        });
        assert!(matches!(
            c.validate(),
            Err(CatalogError::InvalidSlot { .. })
        ));
    }
}
