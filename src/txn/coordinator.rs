//! Transaction coordinator.
//!
//! Sole writer over ledger + capacity. Each operation moves through
//! Requested -> Validating -> {Applied | Rejected}: course lookup, lock
//! acquisition, rule evaluation, then either a combined mutation commits
//! or nothing changes. Readers acquire the same entity locks, so they
//! only ever observe committed state: never a reserved seat without its
//! ledger row, never a withdrawn row whose seat is still taken.

use std::sync::{Arc, PoisonError};

use chrono::Utc;
use tracing::{error, info};

use crate::capacity::{CapacityError, CapacityTracker, SeatSnapshot};
use crate::catalog::{Course, CourseId, CourseProvider};
use crate::ledger::{Enrollment, EnrollmentLedger, StudentId};
use crate::rules::{Decision, RulesEngine};

use super::errors::{EnrollError, TxnResult};
use super::locks::LockTable;

/// A course together with its live seat accounting, for read-side views.
#[derive(Debug, Clone)]
pub struct CourseStatus {
    pub course: Course,
    pub seats: SeatSnapshot,
}

/// Seat accounting and the active rows it must agree with, read under
/// the course lock as one unit.
#[derive(Debug, Clone)]
pub struct CourseRoster {
    pub seats: SeatSnapshot,
    pub active: Vec<Enrollment>,
}

/// Serializes enroll/withdraw operations per student and per course.
pub struct Coordinator {
    catalog: Arc<dyn CourseProvider>,
    ledger: Arc<EnrollmentLedger>,
    capacity: Arc<CapacityTracker>,
    rules: RulesEngine,
    locks: LockTable,
}

impl Coordinator {
    /// Build a coordinator over a catalog, registering a seat counter for
    /// every known course.
    pub fn new(catalog: Arc<dyn CourseProvider>) -> Self {
        let ledger = Arc::new(EnrollmentLedger::new());
        let capacity = Arc::new(CapacityTracker::new());
        for course in catalog.courses() {
            capacity.register(course.id.clone(), course.capacity);
        }
        let rules = RulesEngine::new(
            Arc::clone(&catalog),
            Arc::clone(&ledger),
            Arc::clone(&capacity),
        );
        Coordinator {
            catalog,
            ledger,
            capacity,
            rules,
            locks: LockTable::new(),
        }
    }

    /// Enroll a student in a course.
    ///
    /// Both entity locks are held from before evaluation until the ledger
    /// row and the seat counter have been mutated together, so two
    /// concurrent requests for the last seat cannot both pass validation
    /// and both commit.
    pub fn enroll(&self, student: StudentId, course_id: &CourseId) -> TxnResult<Enrollment> {
        let course = self
            .catalog
            .course(course_id)
            .ok_or_else(|| EnrollError::CourseNotFound(course_id.clone()))?;
        // Late-added catalog entries get their counter on first contact.
        self.capacity.register(course.id.clone(), course.capacity);

        let locks = self.locks.entity_locks(student, course_id);
        let _guards = locks.acquire();

        match self.rules.evaluate_enroll(student, &course) {
            Decision::Reject(reason) => {
                info!(
                    student = %student,
                    course = %course_id,
                    code = reason.code(),
                    "enroll rejected"
                );
                Err(reason.into())
            }
            Decision::Accept => {
                // Atomicity backstop: reserve re-checks under the counter
                // lock, so even a coordinator bug that let two evaluations
                // pass cannot oversubscribe the course.
                self.capacity.reserve(course_id).map_err(|err| match err {
                    CapacityError::Exhausted(course) => {
                        info!(student = %student, course = %course, "enroll rejected at reserve");
                        EnrollError::from(crate::rules::RejectReason::CapacityExceeded(course))
                    }
                    other => self.invariant_failure(student, course_id, &other.to_string()),
                })?;

                match self.ledger.record(student, course_id.clone(), Utc::now()) {
                    Ok(enrollment) => {
                        info!(
                            student = %student,
                            course = %course_id,
                            enrollment = %enrollment.id,
                            "enroll applied"
                        );
                        Ok(enrollment)
                    }
                    Err(err) => {
                        // Evaluation passed under lock, so a duplicate row
                        // here means the locking discipline broke. Give the
                        // seat back and abort.
                        if let Err(release_err) = self.capacity.release(course_id) {
                            error!(
                                student = %student,
                                course = %course_id,
                                detail = %release_err,
                                "seat release failed while aborting enroll"
                            );
                        }
                        Err(self.invariant_failure(student, course_id, &err.to_string()))
                    }
                }
            }
        }
    }

    /// Withdraw a student from a course. Symmetric to [`Coordinator::enroll`]:
    /// ledger row transitions to Withdrawn and the seat is released under
    /// the same locks.
    pub fn withdraw(&self, student: StudentId, course_id: &CourseId) -> TxnResult<Enrollment> {
        if self.catalog.course(course_id).is_none() {
            return Err(EnrollError::CourseNotFound(course_id.clone()));
        }

        let locks = self.locks.entity_locks(student, course_id);
        let _guards = locks.acquire();

        match self.rules.evaluate_drop(student, course_id) {
            Decision::Reject(reason) => {
                info!(
                    student = %student,
                    course = %course_id,
                    code = reason.code(),
                    "withdraw rejected"
                );
                Err(reason.into())
            }
            Decision::Accept => {
                let enrollment = self
                    .ledger
                    .withdraw(student, course_id, Utc::now())
                    .map_err(|err| self.invariant_failure(student, course_id, &err.to_string()))?;

                // The row was active, so a seat must be taken; underflow
                // here means counter and ledger diverged.
                self.capacity
                    .release(course_id)
                    .map_err(|err| self.invariant_failure(student, course_id, &err.to_string()))?;

                info!(
                    student = %student,
                    course = %course_id,
                    enrollment = %enrollment.id,
                    "withdraw applied"
                );
                Ok(enrollment)
            }
        }
    }

    // ==================
    // Read side (committed snapshots)
    // ==================
    //
    // Every read enters the entity lock of its scope. A mutation holds
    // both its locks from evaluation through the last of its two writes,
    // so a reader that has the lock sees either none or both.

    /// The student's active enrollments.
    pub fn enrollments(&self, student: StudentId) -> Vec<Enrollment> {
        let lock = self.locks.student_lock(student);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.ledger.active_enrollments(student)
    }

    /// Full enrollment history for a student, withdrawn rows included.
    pub fn history(&self, student: StudentId) -> Vec<Enrollment> {
        let lock = self.locks.student_lock(student);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.ledger.history(student)
    }

    /// The student's current load.
    pub fn load(&self, student: StudentId) -> usize {
        let lock = self.locks.student_lock(student);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.ledger.load(student)
    }

    /// Resolved course records the student is actively enrolled in.
    pub fn schedule(&self, student: StudentId) -> Vec<Course> {
        let lock = self.locks.student_lock(student);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.ledger
            .active_courses(student)
            .into_iter()
            .filter_map(|id| self.catalog.course(&id))
            .collect()
    }

    /// One course with its live seat accounting.
    pub fn course_status(&self, course_id: &CourseId) -> TxnResult<CourseStatus> {
        let course = self
            .catalog
            .course(course_id)
            .ok_or_else(|| EnrollError::CourseNotFound(course_id.clone()))?;
        self.capacity.register(course.id.clone(), course.capacity);
        let lock = self.locks.course_lock(course_id);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let seats = self
            .capacity
            .snapshot(course_id)
            .map_err(|err| EnrollError::invariant(err.to_string()))?;
        Ok(CourseStatus { course, seats })
    }

    /// Seat snapshot plus the course's active rows, as one locked read.
    /// The two always agree; a mismatch would mean a mutation escaped
    /// its locks.
    pub fn roster(&self, course_id: &CourseId) -> TxnResult<CourseRoster> {
        if self.catalog.course(course_id).is_none() {
            return Err(EnrollError::CourseNotFound(course_id.clone()));
        }
        let lock = self.locks.course_lock(course_id);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let seats = self
            .capacity
            .snapshot(course_id)
            .map_err(|err| EnrollError::invariant(err.to_string()))?;
        let active = self.ledger.active_in_course(course_id);
        Ok(CourseRoster { seats, active })
    }

    /// Every catalog course with live seat accounting, in stable order.
    pub fn course_statuses(&self) -> Vec<CourseStatus> {
        self.catalog
            .courses()
            .into_iter()
            .filter_map(|course| self.course_status(&course.id).ok())
            .collect()
    }

    fn invariant_failure(
        &self,
        student: StudentId,
        course: &CourseId,
        detail: &str,
    ) -> EnrollError {
        error!(
            student = %student,
            course = %course,
            detail,
            "invariant violation in enrollment transaction"
        );
        EnrollError::invariant(detail)
    }
}
