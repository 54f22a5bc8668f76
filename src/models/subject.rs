//! Subject model.
//!
//! A subject is a course offered to student groups. Its kind decides
//! which rooms can host it, and `classes_per_week` decides how many
//! weekly meetings each enrolled group needs.

use serde::{Deserialize, Serialize};

/// A subject (course) to be timetabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Subject classification (decides room compatibility).
    #[serde(rename = "type")]
    pub kind: SubjectKind,
    /// Weekly meetings required per enrolled group (default: 1).
    #[serde(default = "default_classes_per_week")]
    pub classes_per_week: u32,
}

/// Subject type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    /// Taught in lecture rooms.
    Lecture,
    /// Taught in designated labs.
    Lab,
}

fn default_classes_per_week() -> u32 {
    1
}

impl Subject {
    /// Creates a new subject.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: SubjectKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            classes_per_week: default_classes_per_week(),
        }
    }

    /// Creates a lecture subject.
    pub fn lecture(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, SubjectKind::Lecture)
    }

    /// Creates a lab subject.
    pub fn lab(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, SubjectKind::Lab)
    }

    /// Sets the number of weekly meetings per enrolled group.
    pub fn with_classes_per_week(mut self, count: u32) -> Self {
        self.classes_per_week = count;
        self
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
    fn test_subject_builder() {
        let s = Subject::lab("chem", "Chemistry").with_classes_per_week(2);
        assert_eq!(s.id, "chem");
        assert_eq!(s.name, "Chemistry");
        assert_eq!(s.kind, SubjectKind::Lab);
        assert_eq!(s.classes_per_week, 2);
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let named = Subject::lecture("math", "Mathematics");
        assert_eq!(named.label(), "Mathematics");

        let unnamed = Subject::lecture("math", "");
        assert_eq!(unnamed.label(), "math");
    }

    #[test]
    fn test_subject_json_defaults() {
        let s: Subject =
            serde_json::from_str(r#"{"id": "math", "name": "Math", "type": "lecture"}"#).unwrap();
        assert_eq!(s.classes_per_week, 1);
        assert_eq!(s.kind, SubjectKind::Lecture);
    }
}
