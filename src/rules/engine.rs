//! Rule evaluation for enroll and drop requests.
//!
//! Evaluation is a pure read against ledger and capacity state: calling
//! it twice without an intervening mutation yields the same decision.
//! Checks run in a fixed order so the reported reason is deterministic
//! when several rules are violated at once. The coordinator must hold the
//! student and course locks across evaluate+mutate; evaluation on its own
//! gives no atomicity.

use std::sync::Arc;

use crate::capacity::CapacityTracker;
use crate::catalog::{Course, CourseId, CourseProvider};
use crate::ledger::{EnrollmentLedger, StudentId};
use crate::schedule::conflicts;

use super::decision::Decision;
use super::errors::RejectReason;
use super::{MAX_LOAD, MIN_LOAD};

/// Evaluates enrollment rules against ledger + capacity snapshots.
pub struct RulesEngine {
    catalog: Arc<dyn CourseProvider>,
    ledger: Arc<EnrollmentLedger>,
    capacity: Arc<CapacityTracker>,
}

impl RulesEngine {
    pub fn new(
        catalog: Arc<dyn CourseProvider>,
        ledger: Arc<EnrollmentLedger>,
        capacity: Arc<CapacityTracker>,
    ) -> Self {
        RulesEngine {
            catalog,
            ledger,
            capacity,
        }
    }

    /// Evaluate an enroll request. Check order, first failure wins:
    ///
    /// 1. duplicate enrollment (cheapest, most specific)
    /// 2. load ceiling (`load + 1 > MAX_LOAD`)
    /// 3. seat capacity (`available == 0`)
    /// 4. time conflict against every actively enrolled course
    pub fn evaluate_enroll(&self, student: StudentId, course: &Course) -> Decision {
        if self.ledger.active_enrollment(student, &course.id).is_some() {
            return Decision::Reject(RejectReason::DuplicateEnrollment(course.id.clone()));
        }

        let load = self.ledger.load(student);
        if load + 1 > MAX_LOAD {
            return Decision::Reject(RejectReason::LoadLimitExceeded { current: load });
        }

        // Courses are registered with the tracker before evaluation; an
        // unregistered course offers no seats.
        let available = self.capacity.available(&course.id).unwrap_or(0);
        if available == 0 {
            return Decision::Reject(RejectReason::CapacityExceeded(course.id.clone()));
        }

        for enrolled_id in self.ledger.active_courses(student) {
            let Some(enrolled) = self.catalog.course(&enrolled_id) else {
                continue;
            };
            if conflicts(&course.slots, &enrolled.slots) {
                return Decision::Reject(RejectReason::TimeConflict {
                    candidate: course.id.clone(),
                    enrolled: enrolled_id,
                });
            }
        }

        Decision::Accept
    }

    /// Evaluate a drop request. Check order, first failure wins:
    ///
    /// 1. not enrolled
    /// 2. load floor (`load - 1 < MIN_LOAD`)
    ///
    /// The floor is hard: a student sitting at exactly MIN_LOAD cannot
    /// drop further, with no override path.
    pub fn evaluate_drop(&self, student: StudentId, course: &CourseId) -> Decision {
        if self.ledger.active_enrollment(student, course).is_none() {
            return Decision::Reject(RejectReason::NotEnrolled(course.clone()));
        }

        let load = self.ledger.load(student);
        if load - 1 < MIN_LOAD {
            return Decision::Reject(RejectReason::LoadFloorViolation { current: load });
        }

        Decision::Accept
    }
}
