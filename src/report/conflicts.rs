//! Timetable audit: double-bookings and capacity violations.
//!
//! Checks a finished timetable rather than the input: a slot where one
//! teacher, room, or group appears in two meetings is a conflict, and a
//! meeting whose groups outnumber the room's seats is a capacity
//! violation. The solver's own output should audit clean; the audit
//! exists for externally produced or hand-edited timetables too.

use serde::{Deserialize, Serialize};

use crate::models::{Meeting, Problem, Timetable};

/// A teacher double-booked in one slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherConflict {
    pub day: String,
    pub time: String,
    /// Teacher ID.
    pub teacher: String,
    /// The colliding meetings.
    pub classes: Vec<Meeting>,
}

/// A room double-booked in one slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConflict {
    pub day: String,
    pub time: String,
    /// Room ID.
    pub room: String,
    /// The colliding meetings.
    pub classes: Vec<Meeting>,
}

/// A group double-booked in one slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupConflict {
    pub day: String,
    pub time: String,
    /// Group ID.
    pub group: String,
    /// The colliding meetings.
    pub classes: Vec<Meeting>,
}

/// A meeting whose groups outnumber the room's seats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityViolation {
    pub day: String,
    pub time: String,
    pub subject: String,
    pub teacher: String,
    pub room: String,
    pub room_capacity: u32,
    pub groups: Vec<String>,
    pub total_students: u32,
    pub overflow: u32,
}

/// Full audit of a timetable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConflictReport {
    pub teacher_conflicts: Vec<TeacherConflict>,
    pub room_conflicts: Vec<RoomConflict>,
    pub group_conflicts: Vec<GroupConflict>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capacity_violations: Vec<CapacityViolation>,
}

impl ConflictReport {
    /// Audits a timetable against its problem.
    pub fn audit(timetable: &Timetable, problem: &Problem) -> Self {
        let mut report = Self::detect_overlaps(timetable);
        report.capacity_violations = capacity_violations(timetable, problem);
        report
    }

    /// Detects double-bookings only (no problem data needed).
    pub fn detect_overlaps(timetable: &Timetable) -> Self {
        let mut report = Self::default();

        let mut slots: Vec<(String, String)> = timetable
            .meetings
            .iter()
            .map(|m| (m.day.clone(), m.time.clone()))
            .collect();
        slots.sort();
        slots.dedup();

        for (day, time) in slots {
            let here: Vec<&Meeting> = timetable.meetings_at(&day, &time).collect();

            for teacher in distinct(here.iter().map(|m| m.teacher_id.as_str())) {
                let classes: Vec<Meeting> = here
                    .iter()
                    .filter(|m| m.teacher_id == teacher)
                    .map(|m| (*m).clone())
                    .collect();
                if classes.len() > 1 {
                    report.teacher_conflicts.push(TeacherConflict {
                        day: day.clone(),
                        time: time.clone(),
                        teacher: teacher.to_string(),
                        classes,
                    });
                }
            }

            for room in distinct(here.iter().map(|m| m.room.as_str())) {
                let classes: Vec<Meeting> = here
                    .iter()
                    .filter(|m| m.room == room)
                    .map(|m| (*m).clone())
                    .collect();
                if classes.len() > 1 {
                    report.room_conflicts.push(RoomConflict {
                        day: day.clone(),
                        time: time.clone(),
                        room: room.to_string(),
                        classes,
                    });
                }
            }

            for group in distinct(here.iter().flat_map(|m| m.groups.iter().map(|g| g.as_str()))) {
                let classes: Vec<Meeting> = here
                    .iter()
                    .filter(|m| m.attended_by(group))
                    .map(|m| (*m).clone())
                    .collect();
                if classes.len() > 1 {
                    report.group_conflicts.push(GroupConflict {
                        day: day.clone(),
                        time: time.clone(),
                        group: group.to_string(),
                        classes,
                    });
                }
            }
        }

        report
    }

    /// Total number of findings.
    pub fn total(&self) -> usize {
        self.teacher_conflicts.len()
            + self.room_conflicts.len()
            + self.group_conflicts.len()
            + self.capacity_violations.len()
    }

    /// Whether the audit found nothing.
    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}

/// Meetings whose groups outnumber the assigned room's seats.
///
/// Rooms absent from the problem are assumed to hold the default 50.
pub fn capacity_violations(timetable: &Timetable, problem: &Problem) -> Vec<CapacityViolation> {
    let mut violations = Vec::new();

    for meeting in &timetable.meetings {
        let capacity = problem.room(&meeting.room).map(|r| r.capacity).unwrap_or(50);
        let total: u32 = meeting
            .groups
            .iter()
            .map(|g| problem.group(g).map(|g| g.size).unwrap_or(0))
            .sum();

        if total > capacity {
            violations.push(CapacityViolation {
                day: meeting.day.clone(),
                time: meeting.time.clone(),
                subject: meeting.subject.clone(),
                teacher: meeting.teacher.clone(),
                room: meeting.room.clone(),
                room_capacity: capacity,
                groups: meeting.groups.clone(),
                total_students: total,
                overflow: total - capacity,
            });
        }
    }

    violations
}

fn distinct<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut v: Vec<&str> = items.collect();
    v.sort_unstable();
    v.dedup();
    v
}
