//! API boundary
//!
//! Transport-facing request/response types, principal narrowing, and the
//! mapping of core outcomes to stable reason codes and HTTP statuses.

mod errors;
mod request;
mod response;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use request::{CourseListQuery, EnrollRequest, Principal, Role, StudentPrincipal};
pub use response::{CourseListResponse, CourseView, EnrollmentView, WithdrawResponse};
