//! Course-keyed seat accounting.
//!
//! One lock-guarded [`SeatCounter`] per course. The tracker never hands
//! out a mutable reference to a counter; every mutation happens inside
//! `reserve`/`release` while the counter's own lock is held.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError, RwLock};

use serde::Serialize;

use crate::catalog::CourseId;

use super::counter::{CounterError, SeatCounter};
use super::errors::CapacityError;

/// Read-side view of one course's seat accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatSnapshot {
    pub capacity: u32,
    pub taken: u32,
    pub available: u32,
}

/// Per-course seat counters.
#[derive(Debug, Default)]
pub struct CapacityTracker {
    counters: RwLock<HashMap<CourseId, Mutex<SeatCounter>>>,
}

impl CapacityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a course's counter with all seats free. A second
    /// registration for the same course is a no-op; the live counter is
    /// authoritative.
    pub fn register(&self, course: CourseId, capacity: u32) {
        let mut counters = self.counters.write().unwrap_or_else(PoisonError::into_inner);
        counters
            .entry(course)
            .or_insert_with(|| Mutex::new(SeatCounter::new(capacity)));
    }

    /// Seats still available for a course.
    pub fn available(&self, course: &CourseId) -> Result<u32, CapacityError> {
        self.with_counter(course, |counter| Ok(counter.available()))
    }

    /// Read-side snapshot for display.
    pub fn snapshot(&self, course: &CourseId) -> Result<SeatSnapshot, CapacityError> {
        self.with_counter(course, |counter| {
            Ok(SeatSnapshot {
                capacity: counter.capacity(),
                taken: counter.taken(),
                available: counter.available(),
            })
        })
    }

    /// Atomically take one seat iff one is available. On failure the
    /// counter is untouched.
    pub fn reserve(&self, course: &CourseId) -> Result<(), CapacityError> {
        self.with_counter(course, |counter| {
            counter.reserve().map_err(|err| match err {
                CounterError::Exhausted => CapacityError::Exhausted(course.clone()),
                CounterError::Underflow => CapacityError::Underflow(course.clone()),
            })
        })
    }

    /// Atomically give one seat back. Underflow is reported, the counter
    /// stays at zero.
    pub fn release(&self, course: &CourseId) -> Result<(), CapacityError> {
        self.with_counter(course, |counter| {
            counter.release().map_err(|err| match err {
                CounterError::Underflow => CapacityError::Underflow(course.clone()),
                CounterError::Exhausted => CapacityError::Exhausted(course.clone()),
            })
        })
    }

    fn with_counter<T>(
        &self,
        course: &CourseId,
        f: impl FnOnce(&mut SeatCounter) -> Result<T, CapacityError>,
    ) -> Result<T, CapacityError> {
        let counters = self.counters.read().unwrap_or_else(PoisonError::into_inner);
        let cell = counters
            .get(course)
            .ok_or_else(|| CapacityError::UnknownCourse(course.clone()))?;
        let mut counter = cell.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut counter)
    }
}
