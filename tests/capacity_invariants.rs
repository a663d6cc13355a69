//! Capacity Invariant Tests
//!
//! Tests that seat accounting holds its bounds under every sequence and
//! under concurrent mutation:
//! - 0 <= taken <= capacity at every point
//! - Exactly one winner for the last seat
//! - Double-release is reported, never absorbed into a negative count

use std::sync::Arc;
use std::thread;

use enrolld::capacity::{CapacityError, CapacityTracker};
use enrolld::catalog::{Course, CourseId, CourseKind, InMemoryCatalog};
use enrolld::ledger::StudentId;
use enrolld::txn::Coordinator;

fn course(id: &str, capacity: u32) -> Course {
    Course {
        id: CourseId::new(id),
        name: id.to_string(),
        kind: CourseKind::Elective,
        capacity,
        credits: 3,
        semester: None,
        description: String::new(),
        slots: vec![],
    }
}

fn coordinator(courses: Vec<Course>) -> Arc<Coordinator> {
    let catalog = InMemoryCatalog::from_courses(courses).unwrap();
    Arc::new(Coordinator::new(Arc::new(catalog)))
}

// =============================================================================
// Last-Seat Race
// =============================================================================

/// Two concurrent enrolls for one remaining seat: exactly one Applied,
/// the other observes capacity exceeded. Never both, never neither.
#[test]
fn test_last_seat_single_winner() {
    for _ in 0..50 {
        let coord = coordinator(vec![course("CS101", 1)]);
        let cs101 = CourseId::new("CS101");

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let coord = Arc::clone(&coord);
                let cs101 = cs101.clone();
                let student = StudentId::random();
                thread::spawn(move || coord.enroll(student, &cs101))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let wins = results.iter().filter(|r| r.is_ok()).count();
        let full = results
            .iter()
            .filter(|r| {
                matches!(r, Err(err) if err.code() == "ENR_CAPACITY_EXCEEDED")
            })
            .count();

        assert_eq!(wins, 1, "exactly one enrollment must win the last seat");
        assert_eq!(full, 1, "the loser must observe capacity exceeded");

        let status = coord.course_status(&cs101).unwrap();
        assert_eq!(status.seats.taken, 1);
    }
}

/// Many students racing for few seats: taken never exceeds capacity.
#[test]
fn test_oversubscribed_course_respects_capacity() {
    let capacity = 4;
    let coord = coordinator(vec![course("CS101", capacity)]);
    let cs101 = CourseId::new("CS101");

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let coord = Arc::clone(&coord);
            let cs101 = cs101.clone();
            let student = StudentId::random();
            thread::spawn(move || coord.enroll(student, &cs101).is_ok())
        })
        .collect();

    let wins = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|&won| won)
        .count() as u32;

    assert_eq!(wins, capacity);
    let status = coord.course_status(&cs101).unwrap();
    assert_eq!(status.seats.taken, capacity);
    assert_eq!(status.seats.available, 0);
}

/// Concurrent enrolls and withdraws keep the counter inside its bounds.
#[test]
fn test_mixed_churn_keeps_bounds() {
    let capacity = 3;
    let coord = coordinator(vec![
        course("HOT", capacity),
        course("P0", 100),
        course("P1", 100),
        course("P2", 100),
    ]);
    let hot = CourseId::new("HOT");

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let coord = Arc::clone(&coord);
            let hot = hot.clone();
            thread::spawn(move || {
                let student = StudentId::random();
                // Padding keeps the student above MIN_LOAD so the hot
                // course can be dropped again.
                for p in 0..3 {
                    coord
                        .enroll(student, &CourseId::new(format!("P{}", p)))
                        .unwrap();
                }
                for _ in 0..10 {
                    if coord.enroll(student, &hot).is_ok() {
                        coord.withdraw(student, &hot).unwrap();
                    }
                    let seats = coord.course_status(&hot).unwrap().seats;
                    assert!(seats.taken <= seats.capacity);
                    assert!(seats.available <= seats.capacity);
                }
                i
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let seats = coord.course_status(&hot).unwrap().seats;
    assert_eq!(seats.taken, 0);
    assert_eq!(seats.available, capacity);
}

// =============================================================================
// Release Guard
// =============================================================================

/// Double-release reports underflow and leaves the counter at zero.
#[test]
fn test_double_release_guard() {
    let tracker = CapacityTracker::new();
    let cs101 = CourseId::new("CS101");
    tracker.register(cs101.clone(), 2);

    tracker.reserve(&cs101).unwrap();
    tracker.release(&cs101).unwrap();
    assert_eq!(
        tracker.release(&cs101),
        Err(CapacityError::Underflow(cs101.clone()))
    );
    assert_eq!(tracker.snapshot(&cs101).unwrap().taken, 0);
}

/// Concurrent reserve/release pairs leave the counter balanced.
#[test]
fn test_concurrent_reserve_release_balance() {
    let tracker = Arc::new(CapacityTracker::new());
    let cs101 = CourseId::new("CS101");
    tracker.register(cs101.clone(), 8);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let tracker = Arc::clone(&tracker);
            let cs101 = cs101.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    tracker.reserve(&cs101).unwrap();
                    tracker.release(&cs101).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(tracker.snapshot(&cs101).unwrap().taken, 0);
}
