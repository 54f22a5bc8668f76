//! Pivoted timetable views.
//!
//! Renders the flat meeting list as a weekly grid for one group, one
//! teacher, or one room: a row per day (canonical week order), a column
//! per start time (ascending), and in each cell the meeting seated there.
//!
//! A filter that matches nothing renders the default empty school week
//! (Mon-Fri, six standard start times) so consumers always get a grid.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{day_rank, Meeting, Timetable};

/// Days rendered when a filter matches no meetings.
pub const DEFAULT_DAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// Times rendered when a filter matches no meetings.
pub const DEFAULT_TIMES: [&str; 6] = ["08:00", "09:00", "11:00", "13:00", "14:00", "16:00"];

/// Selects the meetings a view is rendered for.
///
/// Exactly one entity is filtered on; the variants make any other
/// combination unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewFilter {
    /// Meetings attended by a group.
    Group(String),
    /// Meetings taught by a teacher.
    Teacher(String),
    /// Meetings hosted in a room.
    Room(String),
}

impl ViewFilter {
    /// Whether a meeting belongs to this view.
    pub fn matches(&self, meeting: &Meeting) -> bool {
        match self {
            Self::Group(id) => meeting.attended_by(id),
            Self::Teacher(id) => meeting.teacher_id == *id,
            Self::Room(id) => meeting.room == *id,
        }
    }
}

/// One rendered grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellEntry {
    /// Subject display name.
    pub subject: String,
    /// Teacher display name.
    pub teacher: String,
    /// Room ID.
    pub room: String,
    /// Comma-joined attending groups.
    pub group: String,
}

impl CellEntry {
    fn from_meeting(meeting: &Meeting) -> Self {
        Self {
            subject: meeting.subject.clone(),
            teacher: meeting.teacher.clone(),
            room: meeting.room.clone(),
            group: meeting.groups_label(),
        }
    }
}

/// One grid row: a day and its cells, one per time column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridRow {
    /// Day label.
    pub day: String,
    /// One cell per time column; `None` = free slot.
    pub cells: Vec<Option<CellEntry>>,
}

/// A pivoted weekly timetable view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableGrid {
    /// Time column labels, ascending.
    pub times: Vec<String>,
    /// Day rows in canonical week order.
    pub rows: Vec<GridRow>,
}

impl TimetableGrid {
    /// Renders the view of a timetable selected by `filter`.
    ///
    /// Days shown are the days the selection occupies, in canonical week
    /// order; times are the selection's start times, ascending. The
    /// first matching meeting wins a contested cell. An empty selection
    /// yields the default empty week.
    pub fn pivot(timetable: &Timetable, filter: &ViewFilter) -> Self {
        let selection: Vec<&Meeting> = timetable
            .meetings
            .iter()
            .filter(|m| filter.matches(m))
            .collect();

        if selection.is_empty() {
            return Self::default_empty();
        }

        let mut times: Vec<String> = selection.iter().map(|m| m.time.clone()).collect();
        times.sort();
        times.dedup();

        let mut days: Vec<String> = selection.iter().map(|m| m.day.clone()).collect();
        days.sort();
        days.dedup();
        days.sort_by_key(|d| day_rank(d));

        let rows = days
            .into_iter()
            .map(|day| {
                let cells = times
                    .iter()
                    .map(|time| {
                        selection
                            .iter()
                            .find(|m| m.day == day && m.time == *time)
                            .map(|m| CellEntry::from_meeting(m))
                    })
                    .collect();
                GridRow { day, cells }
            })
            .collect();

        Self { times, rows }
    }

    /// The default empty week: Mon-Fri rows, standard time columns,
    /// every cell free.
    pub fn default_empty() -> Self {
        Self {
            times: DEFAULT_TIMES.iter().map(|t| t.to_string()).collect(),
            rows: DEFAULT_DAYS
                .iter()
                .map(|day| GridRow {
                    day: day.to_string(),
                    cells: vec![None; DEFAULT_TIMES.len()],
                })
                .collect(),
        }
    }

    /// The cell at (day, time), if both exist and the slot is taken.
    pub fn cell(&self, day: &str, time: &str) -> Option<&CellEntry> {
        let col = self.times.iter().position(|t| t == time)?;
        self.rows
            .iter()
            .find(|r| r.day == day)
            .and_then(|r| r.cells[col].as_ref())
    }

    /// Rows as JSON objects: `{"Day": <day>, "<time>": <cell or null>, ...}`.
    ///
    /// This is the row layout written to the `.json` artifacts.
    pub fn day_rows(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                let mut obj = Map::new();
                obj.insert("Day".to_string(), Value::String(row.day.clone()));
                for (time, cell) in self.times.iter().zip(&row.cells) {
                    let value = match cell {
                        Some(entry) => serde_json::to_value(entry).unwrap_or(Value::Null),
                        None => Value::Null,
                    };
                    obj.insert(time.clone(), value);
                }
                obj
            })
            .collect()
    }
}
