//! Schedule model
//!
//! Represents a course's weekly meetings as half-open intervals and
//! provides pure overlap testing. No shared state lives here; the rules
//! engine calls [`conflicts`] against ledger snapshots.

mod slot;
mod time;

pub use slot::{conflicts, TimeSlot};
pub use time::{DayOfWeek, TimeError, TimeOfDay};
