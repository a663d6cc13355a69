//! Per-entity lock table.
//!
//! One mutex per student and one per course, created on first use. Every
//! operation touches exactly one student and one course and acquires in
//! the fixed student-then-course order, which excludes deadlock.
//!
//! Capacity contention is course-scoped (all students racing for the
//! last seat) while load/conflict contention is student-scoped (one
//! student double-submitting), so locking the (student, course) pair
//! alone would not serialize the capacity race.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::catalog::CourseId;
use crate::ledger::StudentId;

/// Guards held for the duration of one evaluate+mutate unit.
pub struct EntityGuards<'a> {
    _student: MutexGuard<'a, ()>,
    _course: MutexGuard<'a, ()>,
}

/// Handles to the two entity locks an operation needs. Lock with
/// [`EntityLocks::acquire`]; the handles keep the mutexes alive while the
/// table's internal map lock is already released.
pub struct EntityLocks {
    student: Arc<Mutex<()>>,
    course: Arc<Mutex<()>>,
}

impl EntityLocks {
    /// Block until both locks are held, student first.
    pub fn acquire(&self) -> EntityGuards<'_> {
        let student = self.student.lock().unwrap_or_else(PoisonError::into_inner);
        let course = self.course.lock().unwrap_or_else(PoisonError::into_inner);
        EntityGuards {
            _student: student,
            _course: course,
        }
    }
}

/// Lazily populated per-student and per-course mutexes.
///
/// Entries are never removed; the table grows with the set of entities
/// seen, which is bounded by the student body and the catalog.
#[derive(Debug, Default)]
pub struct LockTable {
    students: Mutex<HashMap<StudentId, Arc<Mutex<()>>>>,
    courses: Mutex<HashMap<CourseId, Arc<Mutex<()>>>>,
}

impl LockTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch (creating if absent) the lock pair for one operation.
    pub fn entity_locks(&self, student: StudentId, course: &CourseId) -> EntityLocks {
        EntityLocks {
            student: self.student_lock(student),
            course: self.course_lock(course),
        }
    }

    /// One student's lock, for student-scoped reads. Readers hold it so
    /// they cannot interleave with a mutation for the same student.
    pub fn student_lock(&self, student: StudentId) -> Arc<Mutex<()>> {
        let mut students = self.students.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(students.entry(student).or_default())
    }

    /// One course's lock, for course-scoped reads.
    pub fn course_lock(&self, course: &CourseId) -> Arc<Mutex<()>> {
        let mut courses = self.courses.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(courses.entry(course.clone()).or_default())
    }
}
