//! Timetable (solution) model.
//!
//! A timetable is a set of seated class meetings plus the requirements
//! the solver could not seat. Meetings carry both entity IDs (for
//! querying and artifact naming) and display names (for rendered views).

use serde::{Deserialize, Serialize};

use super::slots::day_rank;

/// One seated class meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Day label.
    pub day: String,
    /// Start time label.
    pub time: String,
    /// Subject ID.
    pub subject_id: String,
    /// Subject display name.
    pub subject: String,
    /// Teacher ID.
    pub teacher_id: String,
    /// Teacher display name.
    pub teacher: String,
    /// Room ID.
    pub room: String,
    /// Attending group IDs.
    pub groups: Vec<String>,
}

impl Meeting {
    /// Whether the given group attends this meeting.
    pub fn attended_by(&self, group_id: &str) -> bool {
        self.groups.iter().any(|g| g == group_id)
    }

    /// Comma-joined group list for rendered views.
    pub fn groups_label(&self) -> String {
        self.groups.join(", ")
    }
}

/// A requirement the solver could not seat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unplaced {
    /// Group the meeting was for.
    pub group: String,
    /// Subject of the meeting.
    pub subject: String,
    /// Which weekly occurrence failed (1-based).
    pub occurrence: u32,
    /// Why no position was found.
    pub reason: String,
}

/// A complete timetable: seated meetings plus unseated requirements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// Seated meetings.
    pub meetings: Vec<Meeting>,
    /// Requirements with no feasible position.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unplaced: Vec<Unplaced>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a meeting.
    pub fn add_meeting(&mut self, meeting: Meeting) {
        self.meetings.push(meeting);
    }

    /// Records an unseated requirement.
    pub fn add_unplaced(&mut self, unplaced: Unplaced) {
        self.unplaced.push(unplaced);
    }

    /// Number of seated meetings.
    pub fn meeting_count(&self) -> usize {
        self.meetings.len()
    }

    /// Whether every requirement was seated.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Sorts meetings by (canonical day order, time).
    pub fn sort(&mut self) {
        self.meetings
            .sort_by(|a, b| (day_rank(&a.day), &a.time).cmp(&(day_rank(&b.day), &b.time)));
    }

    /// Distinct attending group IDs, sorted.
    pub fn group_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .meetings
            .iter()
            .flat_map(|m| m.groups.iter().cloned())
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }

    /// Distinct teacher IDs, sorted.
    pub fn teacher_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.meetings.iter().map(|m| m.teacher_id.clone()).collect();
        ids.sort();
        ids.dedup();
        ids
    }

    /// Distinct room IDs, sorted.
    pub fn room_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.meetings.iter().map(|m| m.room.clone()).collect();
        ids.sort();
        ids.dedup();
        ids
    }

    /// Distinct subject display names, sorted.
    pub fn subject_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.meetings.iter().map(|m| m.subject.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Distinct days, in canonical week order.
    pub fn days(&self) -> Vec<String> {
        let mut days: Vec<String> = self.meetings.iter().map(|m| m.day.clone()).collect();
        days.sort();
        days.dedup();
        days.sort_by_key(|d| day_rank(d));
        days
    }

    /// Distinct times, ascending.
    pub fn times(&self) -> Vec<String> {
        let mut times: Vec<String> = self.meetings.iter().map(|m| m.time.clone()).collect();
        times.sort();
        times.dedup();
        times
    }

    /// Meetings at a given slot.
    pub fn meetings_at<'a>(
        &'a self,
        day: &'a str,
        time: &'a str,
    ) -> impl Iterator<Item = &'a Meeting> {
        self.meetings
            .iter()
            .filter(move |m| m.day == day && m.time == time)
    }

    /// Meetings attended by a group.
    pub fn meetings_for_group<'a>(&'a self, group_id: &'a str) -> impl Iterator<Item = &'a Meeting> {
        self.meetings.iter().filter(move |m| m.attended_by(group_id))
    }

    /// Meetings taught by a teacher.
    pub fn meetings_for_teacher<'a>(
        &'a self,
        teacher_id: &'a str,
    ) -> impl Iterator<Item = &'a Meeting> {
        self.meetings
            .iter()
            .filter(move |m| m.teacher_id == teacher_id)
    }

    /// Meetings hosted in a room.
    pub fn meetings_for_room<'a>(&'a self, room_id: &'a str) -> impl Iterator<Item = &'a Meeting> {
        self.meetings.iter().filter(move |m| m.room == room_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_meeting(
        day: &str,
        time: &str,
        subject: &str,
        teacher: &str,
        room: &str,
        group: &str,
    ) -> Meeting {
        Meeting {
            day: day.into(),
            time: time.into(),
            subject_id: subject.to_lowercase(),
            subject: subject.into(),
            teacher_id: teacher.to_lowercase(),
            teacher: teacher.into(),
            room: room.into(),
            groups: vec![group.into()],
        }
    }

    fn sample_timetable() -> Timetable {
        let mut t = Timetable::new();
        t.add_meeting(make_meeting("Tue", "09:00", "Math", "T1", "R1", "G2"));
        t.add_meeting(make_meeting("Mon", "08:00", "Math", "T1", "R1", "G1"));
        t.add_meeting(make_meeting("Mon", "09:00", "Chem", "T2", "L1", "G1"));
        t
    }

    #[test]
    fn test_sort_uses_canonical_day_order() {
        let mut t = sample_timetable();
        t.sort();
        let days: Vec<&str> = t.meetings.iter().map(|m| m.day.as_str()).collect();
        assert_eq!(days, vec!["Mon", "Mon", "Tue"]);
        assert_eq!(t.meetings[0].time, "08:00");
    }

    #[test]
    fn test_distinct_queries() {
        let t = sample_timetable();
        assert_eq!(t.group_ids(), vec!["G1", "G2"]);
        assert_eq!(t.teacher_ids(), vec!["t1", "t2"]);
        assert_eq!(t.room_ids(), vec!["L1", "R1"]);
        assert_eq!(t.subject_names(), vec!["Chem", "Math"]);
        assert_eq!(t.days(), vec!["Mon", "Tue"]);
        assert_eq!(t.times(), vec!["08:00", "09:00"]);
    }

    #[test]
    fn test_slot_and_entity_filters() {
        let t = sample_timetable();
        assert_eq!(t.meetings_at("Mon", "08:00").count(), 1);
        assert_eq!(t.meetings_at("Wed", "08:00").count(), 0);
        assert_eq!(t.meetings_for_group("G1").count(), 2);
        assert_eq!(t.meetings_for_teacher("t1").count(), 2);
        assert_eq!(t.meetings_for_room("L1").count(), 1);
    }

    #[test]
    fn test_groups_label() {
        let mut m = make_meeting("Mon", "08:00", "Math", "T1", "R1", "G1");
        m.groups.push("G2".into());
        assert_eq!(m.groups_label(), "G1, G2");
    }

    #[test]
    fn test_completeness() {
        let mut t = sample_timetable();
        assert!(t.is_complete());
        t.add_unplaced(Unplaced {
            group: "G1".into(),
            subject: "bio".into(),
            occurrence: 1,
            reason: "no qualified teacher".into(),
        });
        assert!(!t.is_complete());
        assert_eq!(t.meeting_count(), 3);
    }

    #[test]
    fn test_empty_timetable() {
        let t = Timetable::new();
        assert_eq!(t.meeting_count(), 0);
        assert!(t.is_complete());
        assert!(t.days().is_empty());
        assert!(t.group_ids().is_empty());
    }
}
