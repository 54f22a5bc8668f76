//! Timetable summary.
//!
//! Aggregates a solved timetable into the overview written to
//! `summary.json`: distinct entities, per-entity meeting counts, and the
//! room capacities / group sizes the solution was seated against.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Problem, Timetable};

/// Aggregated view of a solved timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// Number of seated meetings.
    pub total_classes: usize,
    /// Distinct attending group IDs, sorted.
    pub groups: Vec<String>,
    /// Distinct teacher IDs, sorted.
    pub teachers: Vec<String>,
    /// Distinct room IDs, sorted.
    pub rooms: Vec<String>,
    /// Distinct days, canonical week order.
    pub days: Vec<String>,
    /// Distinct start times, ascending.
    pub times: Vec<String>,
    /// Distinct subject names, sorted.
    pub subjects: Vec<String>,
    /// Per-entity meeting counts.
    pub stats: SummaryStats,
    /// Capacity of every room in the problem.
    pub room_capacities: BTreeMap<String, u32>,
    /// Size of every group in the problem.
    pub group_sizes: BTreeMap<String, u32>,
}

/// Meeting counts per entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Meetings per group ID.
    pub classes_per_group: BTreeMap<String, usize>,
    /// Meetings per teacher ID.
    pub classes_per_teacher: BTreeMap<String, usize>,
    /// Meetings per room ID.
    pub classes_per_room: BTreeMap<String, usize>,
    /// Meetings per day.
    pub classes_per_day: BTreeMap<String, usize>,
}

impl Summary {
    /// Collects the summary of a timetable solved for `problem`.
    pub fn collect(timetable: &Timetable, problem: &Problem) -> Self {
        let mut classes_per_group: BTreeMap<String, usize> = BTreeMap::new();
        let mut classes_per_teacher: BTreeMap<String, usize> = BTreeMap::new();
        let mut classes_per_room: BTreeMap<String, usize> = BTreeMap::new();
        let mut classes_per_day: BTreeMap<String, usize> = BTreeMap::new();

        for meeting in &timetable.meetings {
            for group in &meeting.groups {
                *classes_per_group.entry(group.clone()).or_insert(0) += 1;
            }
            *classes_per_teacher
                .entry(meeting.teacher_id.clone())
                .or_insert(0) += 1;
            *classes_per_room.entry(meeting.room.clone()).or_insert(0) += 1;
            *classes_per_day.entry(meeting.day.clone()).or_insert(0) += 1;
        }

        Self {
            total_classes: timetable.meeting_count(),
            groups: timetable.group_ids(),
            teachers: timetable.teacher_ids(),
            rooms: timetable.room_ids(),
            days: timetable.days(),
            times: timetable.times(),
            subjects: timetable.subject_names(),
            stats: SummaryStats {
                classes_per_group,
                classes_per_teacher,
                classes_per_room,
                classes_per_day,
            },
            room_capacities: problem
                .rooms
                .iter()
                .map(|r| (r.id.clone(), r.capacity))
                .collect(),
            group_sizes: problem
                .groups
                .iter()
                .map(|g| (g.id.clone(), g.size))
                .collect(),
        }
    }
}
