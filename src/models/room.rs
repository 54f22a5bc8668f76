//! Room model.
//!
//! Rooms are the spatial resources of a timetable: lecture halls and
//! laboratories. Labs carry a designation list naming the subjects they
//! are equipped for; a lab class may only be seated in a lab designated
//! for its subject.

use serde::{Deserialize, Serialize};

use super::{Subject, SubjectKind};

/// A room that can host class meetings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Room classification.
    #[serde(rename = "type")]
    pub kind: RoomKind,
    /// Seats available (default: 50).
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    /// Subjects this lab is equipped for. Only meaningful for labs;
    /// empty for lecture rooms.
    #[serde(rename = "for", default, skip_serializing_if = "Vec::is_empty")]
    pub equipped_for: Vec<String>,
}

/// Room type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    /// General-purpose teaching room.
    Lecture,
    /// Laboratory with subject-specific equipment.
    Lab,
}

fn default_capacity() -> u32 {
    50
}

impl Room {
    /// Creates a new room.
    pub fn new(id: impl Into<String>, kind: RoomKind) -> Self {
        Self {
            id: id.into(),
            kind,
            capacity: default_capacity(),
            equipped_for: Vec::new(),
        }
    }

    /// Creates a lecture room.
    pub fn lecture(id: impl Into<String>) -> Self {
        Self::new(id, RoomKind::Lecture)
    }

    /// Creates a lab room.
    pub fn lab(id: impl Into<String>) -> Self {
        Self::new(id, RoomKind::Lab)
    }

    /// Sets the seat capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Designates this lab for a subject.
    pub fn equipped_for(mut self, subject_id: impl Into<String>) -> Self {
        self.equipped_for.push(subject_id.into());
        self
    }

    /// Whether this room can host a meeting of the given subject.
    ///
    /// Lecture rooms host lecture subjects; labs host lab subjects they
    /// are designated for.
    pub fn suits(&self, subject: &Subject) -> bool {
        match (self.kind, subject.kind) {
            (RoomKind::Lecture, SubjectKind::Lecture) => true,
            (RoomKind::Lab, SubjectKind::Lab) => {
                self.equipped_for.iter().any(|s| s == &subject.id)
            }
            _ => false,
        }
    }

    /// Whether `students` fit into this room.
    #[inline]
    pub fn fits(&self, students: u32) -> bool {
        students <= self.capacity
    }
}
