//! Weekly slot grid model.
//!
//! The grid is the cross product of teaching days and start times, minus
//! breaks. Days and times are opaque labels; consecutiveness is defined
//! by position in the `times` list, not by parsing clock values.
//!
//! # Break Precedence
//! A break blocks its (day, time) slot for everyone. A break with day
//! `"*"` applies to every teaching day.

use serde::{Deserialize, Serialize};

/// Canonical weekday order used for presentation.
pub const DAY_ORDER: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Day label that marks a break as applying to all days.
pub const EVERY_DAY: &str = "*";

/// Rank of a day in the canonical week; unknown labels sort last.
pub fn day_rank(day: &str) -> usize {
    DAY_ORDER
        .iter()
        .position(|d| *d == day)
        .unwrap_or(DAY_ORDER.len())
}

/// Sorts day labels into canonical week order (stable for unknown labels).
pub fn sort_days(days: &mut [String]) {
    days.sort_by_key(|d| day_rank(d));
}

/// The weekly teaching grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotGrid {
    /// Teaching days, in timetable order.
    pub days: Vec<String>,
    /// Class start times, in timetable order.
    pub times: Vec<String>,
    /// Blocked slots.
    #[serde(default)]
    pub breaks: Vec<Break>,
}

/// A blocked (day, time) slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    /// Day the break falls on, or `"*"` for every day.
    pub day: String,
    /// Start time of the blocked slot.
    pub time: String,
}

impl Break {
    /// Creates a break on a specific day.
    pub fn on(day: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            time: time.into(),
        }
    }

    /// Creates a break that applies to every day.
    pub fn every_day(time: impl Into<String>) -> Self {
        Self {
            day: EVERY_DAY.into(),
            time: time.into(),
        }
    }

    /// Whether this break blocks the given slot.
    pub fn blocks(&self, day: &str, time: &str) -> bool {
        self.time == time && (self.day == EVERY_DAY || self.day == day)
    }
}

impl SlotGrid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a teaching day.
    pub fn with_day(mut self, day: impl Into<String>) -> Self {
        self.days.push(day.into());
        self
    }

    /// Adds a class start time.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.times.push(time.into());
        self
    }

    /// Adds a break.
    pub fn with_break(mut self, brk: Break) -> Self {
        self.breaks.push(brk);
        self
    }

    /// Whether the grid has any (day, time) slot at all.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty() || self.times.is_empty()
    }

    /// Total slot count including blocked ones.
    pub fn slot_count(&self) -> usize {
        self.days.len() * self.times.len()
    }

    /// Whether a slot is blocked by a break.
    pub fn is_blocked(&self, day: &str, time: &str) -> bool {
        self.breaks.iter().any(|b| b.blocks(day, time))
    }

    /// Position of a time in the grid order, if present.
    pub fn time_index(&self, time: &str) -> Option<usize> {
        self.times.iter().position(|t| t == time)
    }

    /// Iterates all (day, time) slots in grid order, breaks included.
    pub fn iter_slots(&self) -> impl Iterator<Item = (&str, &str)> {
        self.days.iter().flat_map(move |d| {
            self.times.iter().map(move |t| (d.as_str(), t.as_str()))
        })
    }
}
