//! Rules engine
//!
//! Evaluates enroll/withdraw requests against institutional rules and
//! produces an accept/reject decision with a specific, stable reason.

mod decision;
mod engine;
mod errors;

pub use decision::Decision;
pub use engine::RulesEngine;
pub use errors::{RejectReason, Severity};

/// Ceiling on simultaneous active enrollments, enforced on enroll.
pub const MAX_LOAD: usize = 8;

/// Floor on simultaneous active enrollments, enforced on drop only. A
/// student below the floor mid-registration is legal.
pub const MIN_LOAD: usize = 2;
