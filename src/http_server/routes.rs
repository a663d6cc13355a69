//! Enrollment HTTP routes.
//!
//! Thin translation layer: handlers narrow the principal, call the
//! coordinator, and map outcomes to views or typed error responses.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::api::{
    ApiResult, CourseListQuery, CourseListResponse, CourseView, EnrollRequest, EnrollmentView,
    StudentPrincipal, WithdrawResponse,
};
use crate::catalog::CourseId;
use crate::txn::Coordinator;

/// State shared across handlers.
pub struct AppState {
    pub coordinator: Arc<Coordinator>,
}

/// Routes mounted under `/api`.
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/courses", get(list_courses))
        .route("/enrollments", post(enroll).get(my_courses))
        .route("/enrollments/my-courses", get(my_courses))
        .route("/enrollments/:course_id", delete(withdraw))
        .with_state(state)
}

/// Health probe routes.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /api/courses — catalog list with live seat counts.
///
/// Optional filters: `search` (name substring, case-insensitive), `kind`,
/// `semester`.
async fn list_courses(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CourseListQuery>,
) -> Json<CourseListResponse> {
    let needle = query.search.as_deref().map(str::to_lowercase);
    let results: Vec<CourseView> = state
        .coordinator
        .course_statuses()
        .into_iter()
        .filter(|status| {
            needle
                .as_deref()
                .map_or(true, |n| status.course.name.to_lowercase().contains(n))
        })
        .filter(|status| query.kind.map_or(true, |k| status.course.kind == k))
        .filter(|status| {
            query
                .semester
                .as_deref()
                .map_or(true, |s| status.course.semester.as_deref() == Some(s))
        })
        .map(CourseView::from)
        .collect();

    Json(CourseListResponse {
        count: results.len(),
        results,
    })
}

/// POST /api/enrollments — enroll the calling student.
async fn enroll(
    State(state): State<Arc<AppState>>,
    student: StudentPrincipal,
    Json(request): Json<EnrollRequest>,
) -> ApiResult<(StatusCode, Json<EnrollmentView>)> {
    let enrollment = state
        .coordinator
        .enroll(student.student_id(), &request.course_id)?;
    Ok((StatusCode::CREATED, Json(EnrollmentView::from(enrollment))))
}

/// GET /api/enrollments (alias /api/enrollments/my-courses) — the
/// calling student's active courses.
async fn my_courses(
    State(state): State<Arc<AppState>>,
    student: StudentPrincipal,
) -> ApiResult<Json<Vec<CourseView>>> {
    let mut views = Vec::new();
    for course in state.coordinator.schedule(student.student_id()) {
        let status = state.coordinator.course_status(&course.id)?;
        views.push(CourseView::from(status));
    }
    Ok(Json(views))
}

/// DELETE /api/enrollments/{course_id} — withdraw the calling student.
async fn withdraw(
    State(state): State<Arc<AppState>>,
    student: StudentPrincipal,
    Path(course_id): Path<String>,
) -> ApiResult<Json<WithdrawResponse>> {
    let course_id = CourseId::new(course_id);
    let status = state.coordinator.course_status(&course_id)?;
    state.coordinator.withdraw(student.student_id(), &course_id)?;
    Ok(Json(WithdrawResponse {
        course_id,
        course_name: status.course.name,
        remaining_enrollments: state.coordinator.load(student.student_id()),
    }))
}
