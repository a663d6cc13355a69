//! Authoritative per-student enrollment store.
//!
//! Append-only row history per student. The interior lock protects map
//! integrity only; making a check-then-mutate sequence atomic is the
//! transaction coordinator's job, which holds per-entity locks around
//! every evaluate+mutate unit.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::catalog::CourseId;

use super::enrollment::{Enrollment, EnrollmentStatus, StudentId};

/// Errors from ledger mutations.
///
/// Both variants are unreachable when the caller holds the student lock
/// and has run rule evaluation first; they exist as final guards so a
/// coordinator bug cannot corrupt the active set silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// An Active row already exists for this (student, course) pair
    #[error("student {student} already has an active enrollment in {course}")]
    AlreadyActive {
        student: StudentId,
        course: CourseId,
    },

    /// No Active row exists for this (student, course) pair
    #[error("student {student} has no active enrollment in {course}")]
    NotEnrolled {
        student: StudentId,
        course: CourseId,
    },
}

/// History-preserving enrollment ledger.
#[derive(Debug, Default)]
pub struct EnrollmentLedger {
    rows: RwLock<HashMap<StudentId, Vec<Enrollment>>>,
}

impl EnrollmentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The Active row for (student, course), if any.
    pub fn active_enrollment(&self, student: StudentId, course: &CourseId) -> Option<Enrollment> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        rows.get(&student)?
            .iter()
            .find(|row| row.is_active() && row.course == *course)
            .cloned()
    }

    /// All Active rows for a student, oldest first.
    pub fn active_enrollments(&self, student: StudentId) -> Vec<Enrollment> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        rows.get(&student)
            .map(|history| history.iter().filter(|r| r.is_active()).cloned().collect())
            .unwrap_or_default()
    }

    /// Course ids the student is actively enrolled in.
    pub fn active_courses(&self, student: StudentId) -> Vec<CourseId> {
        self.active_enrollments(student)
            .into_iter()
            .map(|row| row.course)
            .collect()
    }

    /// Current load: count of Active rows. An unknown student has load 0.
    pub fn load(&self, student: StudentId) -> usize {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        rows.get(&student)
            .map(|history| history.iter().filter(|r| r.is_active()).count())
            .unwrap_or(0)
    }

    /// All Active rows across students for one course.
    pub fn active_in_course(&self, course: &CourseId) -> Vec<Enrollment> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        rows.values()
            .flatten()
            .filter(|row| row.is_active() && row.course == *course)
            .cloned()
            .collect()
    }

    /// Full row history for a student, oldest first, withdrawn included.
    pub fn history(&self, student: StudentId) -> Vec<Enrollment> {
        let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
        rows.get(&student).cloned().unwrap_or_default()
    }

    /// Append a fresh Active row. A prior Withdrawn row for the same
    /// course does not block re-enrollment.
    pub fn record(
        &self,
        student: StudentId,
        course: CourseId,
        now: DateTime<Utc>,
    ) -> Result<Enrollment, LedgerError> {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        let history = rows.entry(student).or_default();
        if history.iter().any(|r| r.is_active() && r.course == course) {
            return Err(LedgerError::AlreadyActive { student, course });
        }
        let row = Enrollment::new(student, course, now);
        history.push(row.clone());
        Ok(row)
    }

    /// Transition the Active row for (student, course) to Withdrawn and
    /// return it.
    pub fn withdraw(
        &self,
        student: StudentId,
        course: &CourseId,
        now: DateTime<Utc>,
    ) -> Result<Enrollment, LedgerError> {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        let history = rows.get_mut(&student).ok_or_else(|| LedgerError::NotEnrolled {
            student,
            course: course.clone(),
        })?;
        let row = history
            .iter_mut()
            .find(|r| r.is_active() && r.course == *course)
            .ok_or_else(|| LedgerError::NotEnrolled {
                student,
                course: course.clone(),
            })?;
        row.status = EnrollmentStatus::Withdrawn { withdrawn_at: now };
        Ok(row.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (StudentId, CourseId) {
        (StudentId::random(), CourseId::new("CS101"))
    }

    #[test]
    fn test_unknown_student_has_zero_load() {
        let ledger = EnrollmentLedger::new();
        assert_eq!(ledger.load(StudentId::random()), 0);
        assert!(ledger.active_enrollments(StudentId::random()).is_empty());
    }

    #[test]
    fn test_record_then_query() {
        let ledger = EnrollmentLedger::new();
        let (student, course) = ids();
        ledger.record(student, course.clone(), Utc::now()).unwrap();

        assert_eq!(ledger.load(student), 1);
        assert!(ledger.active_enrollment(student, &course).is_some());
        assert_eq!(ledger.active_courses(student), vec![course]);
    }

    #[test]
    fn test_duplicate_active_rejected() {
        let ledger = EnrollmentLedger::new();
        let (student, course) = ids();
        ledger.record(student, course.clone(), Utc::now()).unwrap();
        assert_eq!(
            ledger.record(student, course.clone(), Utc::now()),
            Err(LedgerError::AlreadyActive { student, course })
        );
    }

    #[test]
    fn test_withdraw_preserves_history_and_allows_reenroll() {
        let ledger = EnrollmentLedger::new();
        let (student, course) = ids();
        ledger.record(student, course.clone(), Utc::now()).unwrap();
        let withdrawn = ledger.withdraw(student, &course, Utc::now()).unwrap();
        assert!(!withdrawn.is_active());
        assert_eq!(ledger.load(student), 0);

        // Row stays in history.
        assert_eq!(ledger.history(student).len(), 1);

        // Re-enrollment appends a second row.
        ledger.record(student, course.clone(), Utc::now()).unwrap();
        assert_eq!(ledger.load(student), 1);
        assert_eq!(ledger.history(student).len(), 2);
    }

    #[test]
    fn test_active_in_course_spans_students() {
        let ledger = EnrollmentLedger::new();
        let course = CourseId::new("CS101");
        let (first, second) = (StudentId::random(), StudentId::random());
        ledger.record(first, course.clone(), Utc::now()).unwrap();
        ledger.record(second, course.clone(), Utc::now()).unwrap();
        ledger
            .record(first, CourseId::new("MA201"), Utc::now())
            .unwrap();
        assert_eq!(ledger.active_in_course(&course).len(), 2);

        ledger.withdraw(first, &course, Utc::now()).unwrap();
        assert_eq!(ledger.active_in_course(&course).len(), 1);
    }

    #[test]
    fn test_withdraw_without_active_row() {
        let ledger = EnrollmentLedger::new();
        let (student, course) = ids();
        assert!(matches!(
            ledger.withdraw(student, &course, Utc::now()),
            Err(LedgerError::NotEnrolled { .. })
        ));
    }
}
