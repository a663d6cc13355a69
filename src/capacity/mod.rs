//! Capacity tracker
//!
//! Per-course seat accounting: capacity, taken, available. Mutated only
//! through `reserve`/`release`, transactionally with the ledger.

mod counter;
mod errors;
mod tracker;

pub use counter::{CounterError, SeatCounter};
pub use errors::CapacityError;
pub use tracker::{CapacityTracker, SeatSnapshot};
