//! Per-course seat counter.
//!
//! The counter owns its bounds: `0 <= taken <= capacity` holds after every
//! operation, and a failed operation leaves the counter untouched. An
//! underflow on release is reported, never absorbed by clamping, because
//! it means the coordinator's locking discipline was broken.

use thiserror::Error;

/// Counter-level failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CounterError {
    /// No seats available
    #[error("no seats available")]
    Exhausted,

    /// Release called with zero seats taken
    #[error("seat release with zero seats taken")]
    Underflow,
}

/// Seat accounting for one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatCounter {
    capacity: u32,
    taken: u32,
}

impl SeatCounter {
    /// Create a counter with all seats free.
    pub fn new(capacity: u32) -> Self {
        SeatCounter { capacity, taken: 0 }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn taken(&self) -> u32 {
        self.taken
    }

    pub fn available(&self) -> u32 {
        self.capacity - self.taken
    }

    /// Take one seat iff one is available.
    pub fn reserve(&mut self) -> Result<(), CounterError> {
        if self.taken >= self.capacity {
            return Err(CounterError::Exhausted);
        }
        self.taken += 1;
        Ok(())
    }

    /// Give one seat back. Errors at zero instead of going negative.
    pub fn release(&mut self) -> Result<(), CounterError> {
        if self.taken == 0 {
            return Err(CounterError::Underflow);
        }
        self.taken -= 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_until_exhausted() {
        let mut counter = SeatCounter::new(2);
        assert_eq!(counter.available(), 2);
        counter.reserve().unwrap();
        counter.reserve().unwrap();
        assert_eq!(counter.available(), 0);

        // Failed reserve leaves the counter unchanged.
        assert_eq!(counter.reserve(), Err(CounterError::Exhausted));
        assert_eq!(counter.taken(), 2);
    }

    #[test]
    fn test_release_never_goes_negative() {
        let mut counter = SeatCounter::new(1);
        assert_eq!(counter.release(), Err(CounterError::Underflow));
        assert_eq!(counter.taken(), 0);

        counter.reserve().unwrap();
        counter.release().unwrap();
        assert_eq!(counter.taken(), 0);
        assert_eq!(counter.release(), Err(CounterError::Underflow));
    }
}
