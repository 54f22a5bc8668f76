//! Timetable reporting: views, summary, audit, and artifacts.
//!
//! Turns a solved [`Timetable`](crate::models::Timetable) into its
//! consumable outputs:
//!
//! - **`TimetableGrid`**: a weekly pivot view for one group, teacher, or room
//! - **`Summary`**: entity listing and per-entity meeting counts
//! - **`ConflictReport`**: double-booking and capacity audit
//! - **`ArtifactWriter`**: the CSV/JSON bundle written per solved model

mod conflicts;
mod grid;
mod summary;
mod writer;

pub use conflicts::{
    capacity_violations, CapacityViolation, ConflictReport, GroupConflict, RoomConflict,
    TeacherConflict,
};
pub use grid::{CellEntry, GridRow, TimetableGrid, ViewFilter, DEFAULT_DAYS, DEFAULT_TIMES};
pub use summary::{Summary, SummaryStats};
pub use writer::ArtifactWriter;
