//! Course catalog boundary
//!
//! Courses are created and maintained by the catalog collaborator; this
//! module gives the core validated, read-only access to them.

mod course;
mod errors;
mod provider;

pub use course::{Course, CourseId, CourseKind};
pub use errors::CatalogError;
pub use provider::{CourseProvider, InMemoryCatalog};
