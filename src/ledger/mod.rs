//! Enrollment ledger
//!
//! The authoritative per-student set of active enrollments. Source of
//! truth for load counts and schedules; all mutation goes through the
//! transaction coordinator.

mod enrollment;
mod store;

pub use enrollment::{Enrollment, EnrollmentId, EnrollmentStatus, StudentId};
pub use store::{EnrollmentLedger, LedgerError};
