//! Timetabling domain models.
//!
//! Provides the input entities (rooms, teachers, subjects, groups, the
//! weekly slot grid, solver limits) and the solution types (meetings,
//! timetables, unseated requirements).
//!
//! # Entity Roles
//!
//! | Entity | Role |
//! |--------|------|
//! | Room | Spatial resource (lecture hall or designated lab) |
//! | Teacher | Human resource with subject qualifications |
//! | Subject | Course with a weekly meeting demand |
//! | Group | Student cohort with an enrollment list |
//! | SlotGrid | Weekly (day × time) grid minus breaks |
//! | Timetable | Seated meetings plus unseated requirements |

mod group;
mod problem;
mod room;
mod slots;
mod subject;
mod teacher;
mod timetable;

pub use group::Group;
pub use problem::{Limits, Problem};
pub use room::{Room, RoomKind};
pub use slots::{day_rank, sort_days, Break, SlotGrid, DAY_ORDER, EVERY_DAY};
pub use subject::{Subject, SubjectKind};
pub use teacher::Teacher;
pub use timetable::{Meeting, Timetable, Unplaced};
