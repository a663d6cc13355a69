//! enrolld - a strict, concurrency-safe course enrollment engine
//!
//! Students enroll in and drop courses subject to institutional rules:
//! load floor and ceiling, seat capacity, no duplicate enrollment, no
//! overlapping time slots. All mutation flows through the transaction
//! coordinator, which serializes per student and per course.

pub mod api;
pub mod capacity;
pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod ledger;
pub mod rules;
pub mod schedule;
pub mod txn;
