//! Transaction coordinator
//!
//! Wraps each enroll/withdraw in an atomic read-modify-write over the
//! ledger and the capacity tracker, under per-student and per-course
//! locks.

mod coordinator;
mod errors;
mod locks;

pub use coordinator::{Coordinator, CourseRoster, CourseStatus};
pub use errors::{EnrollError, TxnResult};
pub use locks::{EntityGuards, EntityLocks, LockTable};
