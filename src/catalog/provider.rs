//! Read-only course provider boundary.
//!
//! The catalog collaborator owns course data; the core consumes it through
//! [`CourseProvider`]. The in-memory implementation validates every record
//! on load so downstream code never sees a malformed course.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::course::{Course, CourseId};
use super::errors::CatalogError;

/// Read-only access to course records.
pub trait CourseProvider: Send + Sync {
    /// Look up one course by id.
    fn course(&self, id: &CourseId) -> Option<Course>;

    /// All courses, in stable id order.
    fn courses(&self) -> Vec<Course>;
}

/// Validated in-memory catalog, loaded once at boot.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    courses: BTreeMap<CourseId, Course>,
}

impl InMemoryCatalog {
    /// Build a catalog from course records, validating each and rejecting
    /// duplicate ids.
    pub fn from_courses(records: Vec<Course>) -> Result<Self, CatalogError> {
        let mut courses = BTreeMap::new();
        for course in records {
            course.validate()?;
            if courses.contains_key(&course.id) {
                return Err(CatalogError::DuplicateCourse(course.id));
            }
            courses.insert(course.id.clone(), course);
        }
        Ok(InMemoryCatalog { courses })
    }

    /// Load a catalog from a JSON file holding an array of courses.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let data = fs::read_to_string(path)?;
        let records: Vec<Course> = serde_json::from_str(&data)?;
        Self::from_courses(records)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl CourseProvider for InMemoryCatalog {
    fn course(&self, id: &CourseId) -> Option<Course> {
        self.courses.get(id).cloned()
    }

    fn courses(&self) -> Vec<Course> {
        self.courses.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::course::CourseKind;

    fn course(id: &str) -> Course {
        Course {
            id: CourseId::new(id),
            name: id.to_string(),
            kind: CourseKind::Elective,
            capacity: 30,
            credits: 3,
            semester: None,
            description: String::new(),
            slots: vec![],
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = InMemoryCatalog::from_courses(vec![course("CS101"), course("CS101")]);
        assert!(matches!(result, Err(CatalogError::DuplicateCourse(_))));
    }

    #[test]
    fn test_lookup_and_stable_order() {
        let catalog =
            InMemoryCatalog::from_courses(vec![course("MA201"), course("CS101")]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.course(&CourseId::new("CS101")).is_some());
        assert!(catalog.course(&CourseId::new("ZZ999")).is_none());

        let ids: Vec<String> = catalog
            .courses()
            .into_iter()
            .map(|c| c.id.to_string())
            .collect();
        assert_eq!(ids, vec!["CS101", "MA201"]);
    }

    #[test]
    fn test_load_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courses.json");
        let json = serde_json::json!([
            {
                "id": "CS101",
                "name": "Intro to Programming",
                "kind": "required",
                "capacity": 2,
                "credits": 3,
                "slots": [
                    { "day": 1, "start": "10:00", "end": "11:00", "location": "A101" }
                ]
            }
        ]);
        fs::write(&path, serde_json::to_string_pretty(&json).unwrap()).unwrap();

        let catalog = InMemoryCatalog::load_file(&path).unwrap();
        let course = catalog.course(&CourseId::new("CS101")).unwrap();
        assert_eq!(course.capacity, 2);
        assert_eq!(course.slots.len(), 1);
        assert_eq!(course.slots[0].location.as_deref(), Some("A101"));
    }

    #[test]
    fn test_load_file_rejects_invalid_slot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courses.json");
        let json = serde_json::json!([
            {
                "id": "CS101",
                "name": "Intro",
                "kind": "elective",
                "capacity": 2,
                "slots": [ { "day": 1, "start": "11:00", "end": "10:00" } ]
            }
        ]);
        fs::write(&path, json.to_string()).unwrap();
        assert!(matches!(
            InMemoryCatalog::load_file(&path),
            Err(CatalogError::InvalidSlot { .. })
        ));
    }
}
