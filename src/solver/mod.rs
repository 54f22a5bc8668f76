//! Greedy timetable solving.
//!
//! Provides a deterministic first-fit solver over the (teacher, slot,
//! room) search space. It is not optimal, but produces conflict-free
//! baseline timetables fast and reports what it could not seat.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - de Werra (1985), "An Introduction to Timetabling"

mod greedy;

pub use greedy::{GreedySolver, PlacementOrder};
