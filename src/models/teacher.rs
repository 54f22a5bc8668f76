//! Teacher model.
//!
//! Teachers are the human resources of a timetable. Each teacher carries
//! the list of subject IDs they are qualified to teach; the solver only
//! considers qualified teachers for a meeting.

use serde::{Deserialize, Serialize};

/// A teacher who can be assigned to class meetings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Subject IDs this teacher is qualified to teach.
    #[serde(default)]
    pub subjects: Vec<String>,
}

impl Teacher {
    /// Creates a new teacher.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            subjects: Vec::new(),
        }
    }

    /// Sets the teacher name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a subject qualification.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subjects.push(subject_id.into());
        self
    }

    /// Whether this teacher is qualified for the given subject.
    pub fn teaches(&self, subject_id: &str) -> bool {
        self.subjects.iter().any(|s| s == subject_id)
    }

    /// Display label: the name, or the ID when no name is set.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_builder() {
        let t = Teacher::new("t1")
            .with_name("Mr. Banner")
            .with_subject("chem")
            .with_subject("bio");

        assert_eq!(t.id, "t1");
        assert_eq!(t.name, "Mr. Banner");
        assert!(t.teaches("chem"));
        assert!(t.teaches("bio"));
        assert!(!t.teaches("math"));
    }

    #[test]
    fn test_label_falls_back_to_id() {
        assert_eq!(Teacher::new("t1").label(), "t1");
        assert_eq!(Teacher::new("t1").with_name("Ms. Frizzle").label(), "Ms. Frizzle");
    }

    #[test]
    fn test_teacher_json_defaults() {
        let t: Teacher = serde_json::from_str(r#"{"id": "t1"}"#).unwrap();
        assert!(t.name.is_empty());
        assert!(t.subjects.is_empty());
    }
}
