//! Student group model.
//!
//! A group is a cohort of students that attends classes together. Its
//! enrollment list drives the solver's demand: every enrolled subject
//! needs `classes_per_week` meetings seated for the group.

use serde::{Deserialize, Serialize};

/// A student group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Unique group identifier.
    pub id: String,
    /// Number of students (default: 0 = unknown).
    #[serde(default)]
    pub size: u32,
    /// Subject IDs this group is enrolled in.
    #[serde(default)]
    pub subjects: Vec<String>,
}

impl Group {
    /// Creates a new group.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            size: 0,
            subjects: Vec::new(),
        }
    }

    /// Sets the number of students.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Enrolls the group in a subject.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subjects.push(subject_id.into());
        self
    }

    /// Whether the group is enrolled in the given subject.
    pub fn enrolled_in(&self, subject_id: &str) -> bool {
        self.subjects.iter().any(|s| s == subject_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_builder() {
        let g = Group::new("G1").with_size(28).with_subject("math");
        assert_eq!(g.id, "G1");
        assert_eq!(g.size, 28);
        assert!(g.enrolled_in("math"));
        assert!(!g.enrolled_in("chem"));
    }

    #[test]
    fn test_group_json_defaults() {
        let g: Group = serde_json::from_str(r#"{"id": "G1"}"#).unwrap();
        assert_eq!(g.size, 0);
        assert!(g.subjects.is_empty());
    }
}
