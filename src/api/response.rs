//! Boundary response views.
//!
//! Course views carry `enrolled_count` / `remaining_slots` alongside the
//! catalog fields so clients can render availability without a second
//! round trip.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::{CourseId, CourseKind};
use crate::ledger::{Enrollment, EnrollmentId, EnrollmentStatus, StudentId};
use crate::schedule::TimeSlot;
use crate::txn::CourseStatus;

/// One course with live seat accounting.
#[derive(Debug, Clone, Serialize)]
pub struct CourseView {
    pub id: CourseId,
    pub name: String,
    pub kind: CourseKind,
    pub capacity: u32,
    pub credits: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    pub description: String,
    pub enrolled_count: u32,
    pub remaining_slots: u32,
    pub timeslots: Vec<TimeSlot>,
}

impl From<CourseStatus> for CourseView {
    fn from(status: CourseStatus) -> Self {
        let CourseStatus { course, seats } = status;
        CourseView {
            id: course.id,
            name: course.name,
            kind: course.kind,
            capacity: seats.capacity,
            credits: course.credits,
            semester: course.semester,
            description: course.description,
            enrolled_count: seats.taken,
            remaining_slots: seats.available,
            timeslots: course.slots,
        }
    }
}

/// Course list envelope of `GET /api/courses`.
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub count: usize,
    pub results: Vec<CourseView>,
}

/// One enrollment row as returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentView {
    pub id: EnrollmentId,
    pub student: StudentId,
    pub course_id: CourseId,
    pub enrolled_at: DateTime<Utc>,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub withdrawn_at: Option<DateTime<Utc>>,
}

impl From<Enrollment> for EnrollmentView {
    fn from(row: Enrollment) -> Self {
        let (active, withdrawn_at) = match row.status {
            EnrollmentStatus::Active => (true, None),
            EnrollmentStatus::Withdrawn { withdrawn_at } => (false, Some(withdrawn_at)),
        };
        EnrollmentView {
            id: row.id,
            student: row.student,
            course_id: row.course,
            enrolled_at: row.enrolled_at,
            active,
            withdrawn_at,
        }
    }
}

/// Response of `DELETE /api/enrollments/{course_id}`.
#[derive(Debug, Serialize)]
pub struct WithdrawResponse {
    pub course_id: CourseId,
    pub course_name: String,
    pub remaining_enrollments: usize,
}
