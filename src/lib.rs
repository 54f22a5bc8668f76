//! School timetable generator.
//!
//! Takes a JSON problem description — rooms, teachers, subjects, student
//! groups, a weekly slot grid with breaks, and solver limits — and
//! produces a conflict-free weekly timetable plus pivoted views, a
//! summary, and a conflict audit, written as CSV/JSON artifacts.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Room`, `Teacher`, `Subject`, `Group`,
//!   `SlotGrid`, `Problem`, `Meeting`, `Timetable`
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   references, grid sanity, unteachable subjects)
//! - **`solver`**: Deterministic first-fit greedy placement
//! - **`report`**: Pivot views, summary, audit, and the artifact bundle
//!
//! # Pipeline
//!
//! ```text
//! Problem::from_json_file → validate_problem → GreedySolver::solve
//!     → ArtifactWriter::write_all
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - de Werra (1985), "An Introduction to Timetabling"

pub mod cli;
pub mod error;
pub mod logger;
pub mod models;
pub mod report;
pub mod solver;
pub mod validation;

pub use error::{Result, TimetableError};
