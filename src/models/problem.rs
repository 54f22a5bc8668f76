//! Problem model: the full timetabling input.
//!
//! Aggregates rooms, teachers, subjects, groups, the weekly slot grid,
//! and the solver limits, and handles JSON persistence of the whole
//! bundle. The JSON layout mirrors the on-disk model format:
//!
//! ```json
//! {
//!   "rooms": [...], "teachers": [...], "subjects": [...], "groups": [...],
//!   "slots": { "days": [...], "times": [...], "breaks": [...] },
//!   "constraints": { "maximum_consecutive_classes": 2 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

use super::{Group, Room, SlotGrid, Subject, Teacher};

/// A complete timetabling problem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Problem {
    /// Available rooms.
    #[serde(default)]
    pub rooms: Vec<Room>,
    /// Weekly slot grid.
    #[serde(default)]
    pub slots: SlotGrid,
    /// Teaching staff.
    #[serde(default)]
    pub teachers: Vec<Teacher>,
    /// Offered subjects.
    #[serde(default)]
    pub subjects: Vec<Subject>,
    /// Student groups.
    #[serde(default)]
    pub groups: Vec<Group>,
    /// Solver limits.
    #[serde(default)]
    pub constraints: Limits,
}

/// Solver limits applied during placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Limits {
    /// Longest run of back-to-back slots a teacher may take in one day
    /// (default: 2).
    #[serde(default = "default_max_consecutive")]
    pub maximum_consecutive_classes: u32,
    /// Cap on a group's meetings per day. `None` = unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_slot_per_group_per_day: Option<u32>,
}

fn default_max_consecutive() -> u32 {
    2
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            maximum_consecutive_classes: default_max_consecutive(),
            maximum_slot_per_group_per_day: None,
        }
    }
}

impl Problem {
    /// Creates an empty problem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds a teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a group.
    pub fn with_group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    /// Sets the slot grid.
    pub fn with_slots(mut self, slots: SlotGrid) -> Self {
        self.slots = slots;
        self
    }

    /// Sets the solver limits.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.constraints = limits;
        self
    }

    /// Looks up a subject by ID.
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Looks up a room by ID.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Looks up a teacher by ID.
    pub fn teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    /// Looks up a group by ID.
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Teachers qualified for a subject, in declaration order.
    pub fn teachers_for<'a>(&'a self, subject_id: &'a str) -> impl Iterator<Item = &'a Teacher> {
        self.teachers.iter().filter(move |t| t.teaches(subject_id))
    }

    /// Parses a problem from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a problem from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Writes the problem to a JSON file (pretty-printed).
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Break, RoomKind, SubjectKind};

    fn sample_json() -> &'static str {
        r#"{
            "rooms": [
                {"id": "R1", "type": "lecture", "capacity": 40},
                {"id": "L1", "type": "lab", "for": ["chem"]}
            ],
            "slots": {
                "days": ["Mon", "Tue"],
                "times": ["08:00", "09:00", "10:00"],
                "breaks": [{"day": "*", "time": "10:00"}]
            },
            "teachers": [
                {"id": "t1", "name": "Ms. Frizzle", "subjects": ["chem", "math"]}
            ],
            "subjects": [
                {"id": "math", "name": "Mathematics", "type": "lecture"},
                {"id": "chem", "name": "Chemistry", "type": "lab"}
            ],
            "groups": [
                {"id": "G1", "size": 25, "subjects": ["math", "chem"]}
            ],
            "constraints": {"maximum_consecutive_classes": 3}
        }"#
    }

    #[test]
    fn test_from_json() {
        let p = Problem::from_json(sample_json()).unwrap();
        assert_eq!(p.rooms.len(), 2);
        assert_eq!(p.rooms[0].kind, RoomKind::Lecture);
        assert_eq!(p.rooms[1].capacity, 50); // Default applied
        assert_eq!(p.subjects[1].kind, SubjectKind::Lab);
        assert_eq!(p.constraints.maximum_consecutive_classes, 3);
        assert_eq!(p.constraints.maximum_slot_per_group_per_day, None);
        assert!(p.slots.is_blocked("Mon", "10:00"));
    }

    #[test]
    fn test_missing_constraints_defaults() {
        let p = Problem::from_json(r#"{"slots": {"days": ["Mon"], "times": ["08:00"]}}"#).unwrap();
        assert_eq!(p.constraints.maximum_consecutive_classes, 2);
        assert!(p.groups.is_empty());
    }

    #[test]
    fn test_lookups() {
        let p = Problem::from_json(sample_json()).unwrap();
        assert_eq!(p.subject("chem").unwrap().name, "Chemistry");
        assert!(p.subject("bio").is_none());
        assert_eq!(p.room("L1").unwrap().kind, RoomKind::Lab);
        assert_eq!(p.group("G1").unwrap().size, 25);
        assert_eq!(p.teachers_for("math").count(), 1);
        assert_eq!(p.teachers_for("bio").count(), 0);
    }

    #[test]
    fn test_builder() {
        let p = Problem::new()
            .with_room(Room::lecture("R1"))
            .with_teacher(Teacher::new("t1").with_subject("math"))
            .with_subject(Subject::lecture("math", "Mathematics"))
            .with_group(Group::new("G1").with_subject("math"))
            .with_slots(SlotGrid::new().with_day("Mon").with_time("08:00"));

        assert_eq!(p.rooms.len(), 1);
        assert_eq!(p.teachers_for("math").count(), 1);
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");

        let p = Problem::from_json(sample_json()).unwrap();
        p.to_json_file(&path).unwrap();

        let reloaded = Problem::from_json_file(&path).unwrap();
        assert_eq!(reloaded.rooms.len(), p.rooms.len());
        assert_eq!(reloaded.constraints.maximum_consecutive_classes, 3);
        assert_eq!(
            reloaded.slots.breaks,
            vec![Break::every_day("10:00")]
        );
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Problem::from_json("{not json").is_err());
        assert!(Problem::from_json(r#"{"rooms": [{"id": "R1"}]}"#).is_err()); // Missing type
    }
}
