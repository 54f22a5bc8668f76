//! Artifact writer.
//!
//! Writes the full result bundle of a solve into a per-model directory:
//!
//! ```text
//! <base>/
//!   solution.csv
//!   groups/timetable_group_<id>.{csv,json}
//!   teachers/timetable_teacher_<id>.{csv,json}
//!   rooms/timetable_room_<id>.{csv,json}
//!   summary.json
//!   conflicts.json
//!   unplaced.json        (only when the solve was incomplete)
//! ```
//!
//! Grid CSV cells hold the JSON-encoded cell objects; grid JSON files
//! hold one object per day row keyed by time.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::models::{Problem, Timetable};

use super::{ConflictReport, Summary, TimetableGrid, ViewFilter};

/// Writes the artifact bundle for one solved model.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    base: PathBuf,
}

impl ArtifactWriter {
    /// Creates a writer rooted at `base` (created on demand).
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Directory the bundle is written into.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Writes the full bundle and returns the audit it recorded in
    /// `conflicts.json`.
    pub fn write_all(&self, problem: &Problem, timetable: &Timetable) -> Result<ConflictReport> {
        fs::create_dir_all(&self.base)?;

        self.write_solution_csv(timetable)?;

        let groups = timetable.group_ids();
        for id in &groups {
            let grid = TimetableGrid::pivot(timetable, &ViewFilter::Group(id.clone()));
            self.write_grid(&grid, "groups", "timetable_group", id)?;
        }
        info!("wrote {} group timetables (CSV and JSON)", groups.len());

        let teachers = timetable.teacher_ids();
        for id in &teachers {
            let grid = TimetableGrid::pivot(timetable, &ViewFilter::Teacher(id.clone()));
            self.write_grid(&grid, "teachers", "timetable_teacher", id)?;
        }
        info!("wrote {} teacher timetables (CSV and JSON)", teachers.len());

        let rooms = timetable.room_ids();
        for id in &rooms {
            let grid = TimetableGrid::pivot(timetable, &ViewFilter::Room(id.clone()));
            self.write_grid(&grid, "rooms", "timetable_room", id)?;
        }
        info!("wrote {} room timetables (CSV and JSON)", rooms.len());

        let summary = Summary::collect(timetable, problem);
        write_json(self.base.join("summary.json"), &summary)?;
        info!("wrote summary");

        let report = ConflictReport::audit(timetable, problem);
        write_json(self.base.join("conflicts.json"), &report)?;

        if !timetable.is_complete() {
            write_json(self.base.join("unplaced.json"), &timetable.unplaced)?;
            info!("wrote {} unplaced requirements", timetable.unplaced.len());
        }

        Ok(report)
    }

    /// Writes `solution.csv`: one row per meeting.
    fn write_solution_csv(&self, timetable: &Timetable) -> Result<()> {
        let mut wtr = csv::Writer::from_path(self.base.join("solution.csv"))?;
        wtr.write_record(["Day", "Time", "Subject", "Teacher", "Room", "Groups"])?;
        for m in &timetable.meetings {
            let groups = m.groups_label();
            wtr.write_record([
                m.day.as_str(),
                m.time.as_str(),
                m.subject.as_str(),
                m.teacher.as_str(),
                m.room.as_str(),
                groups.as_str(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Writes one pivoted view as `<dir>/<prefix>_<sanitized id>.{csv,json}`.
    fn write_grid(&self, grid: &TimetableGrid, dir: &str, prefix: &str, id: &str) -> Result<()> {
        let dir = self.base.join(dir);
        fs::create_dir_all(&dir)?;
        let stem = format!("{prefix}_{}", sanitize(id));

        let mut wtr = csv::Writer::from_path(dir.join(format!("{stem}.csv")))?;
        let mut header = vec!["Day".to_string()];
        header.extend(grid.times.iter().cloned());
        wtr.write_record(&header)?;
        for row in &grid.rows {
            let mut record = vec![row.day.clone()];
            for cell in &row.cells {
                record.push(match cell {
                    Some(entry) => serde_json::to_string(entry)?,
                    None => String::new(),
                });
            }
            wtr.write_record(&record)?;
        }
        wtr.flush()?;

        write_json(dir.join(format!("{stem}.json")), &grid.day_rows())?;
        Ok(())
    }
}

fn write_json<T: serde::Serialize>(path: PathBuf, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Makes an entity ID safe for use in a file name: spaces become
/// underscores, dots are dropped.
fn sanitize(id: &str) -> String {
    id.replace(' ', "_").replace('.', "")
}
