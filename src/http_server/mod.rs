//! HTTP server
//!
//! REST surface over the enrollment core: course listing, enroll,
//! withdraw, and the calling student's schedule.

mod extract;
mod routes;
mod server;

pub use extract::{ROLE_HEADER, STUDENT_ID_HEADER};
pub use routes::{api_routes, health_routes, AppState};
pub use server::{router, HttpServer, HttpServerConfig};
