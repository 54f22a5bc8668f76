//! Input validation for timetabling problems.
//!
//! Checks structural integrity of the problem before solving. Detects:
//! - Duplicate IDs (rooms, teachers, subjects, groups)
//! - Dangling subject references (enrollments, qualifications, lab designations)
//! - An empty slot grid
//! - Breaks pointing at unknown days or times
//! - Enrolled subjects no teacher is qualified for
//!
//! All problems are collected and reported together; validation never
//! stops at the first error.

use std::collections::HashSet;

use crate::models::{Problem, EVERY_DAY};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of the same kind share an ID.
    DuplicateId,
    /// A subject reference points at no declared subject.
    UnknownSubject,
    /// A break names a day outside the grid.
    UnknownDay,
    /// A break names a time outside the grid.
    UnknownTime,
    /// The grid has no days or no times.
    EmptyGrid,
    /// A subject is enrolled by some group but taught by no teacher.
    UnteachableSubject,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validates a timetabling problem.
///
/// Checks:
/// 1. No duplicate room / teacher / subject / group IDs
/// 2. Group enrollments reference declared subjects
/// 3. Teacher qualifications reference declared subjects
/// 4. Lab designations reference declared subjects
/// 5. The slot grid has at least one day and one time
/// 6. Breaks reference grid days (or `"*"`) and grid times
/// 7. Every enrolled subject has at least one qualified teacher
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &Problem) -> ValidationResult {
    let mut errors = Vec::new();

    check_duplicates(problem, &mut errors);

    let subject_ids: HashSet<&str> = problem.subjects.iter().map(|s| s.id.as_str()).collect();

    for group in &problem.groups {
        for sid in &group.subjects {
            if !subject_ids.contains(sid.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubject,
                    format!("Group '{}' is enrolled in unknown subject '{sid}'", group.id),
                ));
            }
        }
    }

    for teacher in &problem.teachers {
        for sid in &teacher.subjects {
            if !subject_ids.contains(sid.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubject,
                    format!(
                        "Teacher '{}' is qualified for unknown subject '{sid}'",
                        teacher.id
                    ),
                ));
            }
        }
    }

    for room in &problem.rooms {
        for sid in &room.equipped_for {
            if !subject_ids.contains(sid.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSubject,
                    format!("Room '{}' is designated for unknown subject '{sid}'", room.id),
                ));
            }
        }
    }

    check_grid(problem, &mut errors);
    check_teachability(problem, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_duplicates(problem: &Problem, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for room in &problem.rooms {
        if !seen.insert(room.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", room.id),
            ));
        }
    }

    let mut seen = HashSet::new();
    for teacher in &problem.teachers {
        if !seen.insert(teacher.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", teacher.id),
            ));
        }
    }

    let mut seen = HashSet::new();
    for subject in &problem.subjects {
        if !seen.insert(subject.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", subject.id),
            ));
        }
    }

    let mut seen = HashSet::new();
    for group in &problem.groups {
        if !seen.insert(group.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate group ID: {}", group.id),
            ));
        }
    }
}

fn check_grid(problem: &Problem, errors: &mut Vec<ValidationError>) {
    if problem.slots.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyGrid,
            "Slot grid has no days or no times",
        ));
        return;
    }

    let days: HashSet<&str> = problem.slots.days.iter().map(|d| d.as_str()).collect();
    let times: HashSet<&str> = problem.slots.times.iter().map(|t| t.as_str()).collect();

    for brk in &problem.slots.breaks {
        if brk.day != EVERY_DAY && !days.contains(brk.day.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDay,
                format!("Break references unknown day '{}'", brk.day),
            ));
        }
        if !times.contains(brk.time.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTime,
                format!("Break references unknown time '{}'", brk.time),
            ));
        }
    }
}

fn check_teachability(problem: &Problem, errors: &mut Vec<ValidationError>) {
    let mut enrolled: Vec<&str> = problem
        .groups
        .iter()
        .flat_map(|g| g.subjects.iter().map(|s| s.as_str()))
        .collect();
    enrolled.sort_unstable();
    enrolled.dedup();

    for sid in enrolled {
        let declared = problem.subjects.iter().any(|s| s.id == sid);
        if declared && problem.teachers_for(sid).next().is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnteachableSubject,
                format!("Subject '{sid}' is enrolled but no teacher is qualified for it"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Break, Group, Room, SlotGrid, Subject, Teacher};

    fn sample_problem() -> Problem {
        Problem::new()
            .with_room(Room::lecture("R1"))
            .with_room(Room::lab("L1").equipped_for("chem"))
            .with_teacher(Teacher::new("t1").with_subject("math").with_subject("chem"))
            .with_subject(Subject::lecture("math", "Mathematics"))
            .with_subject(Subject::lab("chem", "Chemistry"))
            .with_group(Group::new("G1").with_subject("math").with_subject("chem"))
            .with_slots(
                SlotGrid::new()
                    .with_day("Mon")
                    .with_day("Tue")
                    .with_time("08:00")
                    .with_time("09:00")
                    .with_break(Break::every_day("09:00")),
            )
    }

    #[test]
    fn test_valid_problem() {
        assert!(validate_problem(&sample_problem()).is_ok());
    }

    #[test]
    fn test_duplicate_room_id() {
        let p = sample_problem().with_room(Room::lecture("R1"));
        let errors = validate_problem(&p).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("room")));
    }

    #[test]
    fn test_duplicate_ids_per_entity_kind() {
        let p = sample_problem()
            .with_teacher(Teacher::new("t1"))
            .with_subject(Subject::lecture("math", "Maths again"))
            .with_group(Group::new("G1"));
        let errors = validate_problem(&p).unwrap_err();
        let dups = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::DuplicateId)
            .count();
        assert_eq!(dups, 3);
    }

    #[test]
    fn test_unknown_subject_in_enrollment() {
        let p = sample_problem().with_group(Group::new("G2").with_subject("bio"));
        let errors = validate_problem(&p).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownSubject && e.message.contains("G2")));
    }

    #[test]
    fn test_unknown_subject_in_qualification() {
        let p = sample_problem().with_teacher(Teacher::new("t2").with_subject("bio"));
        let errors = validate_problem(&p).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownSubject && e.message.contains("t2")));
    }

    #[test]
    fn test_unknown_subject_in_lab_designation() {
        let p = sample_problem().with_room(Room::lab("L2").equipped_for("bio"));
        let errors = validate_problem(&p).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownSubject && e.message.contains("L2")));
    }

    #[test]
    fn test_empty_grid() {
        let p = sample_problem().with_slots(SlotGrid::new());
        let errors = validate_problem(&p).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyGrid));
    }

    #[test]
    fn test_break_on_unknown_day_and_time() {
        let p = sample_problem().with_slots(
            SlotGrid::new()
                .with_day("Mon")
                .with_time("08:00")
                .with_break(Break::on("Sat", "12:00")),
        );
        let errors = validate_problem(&p).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownDay));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownTime));
    }

    #[test]
    fn test_wildcard_break_day_is_valid() {
        let p = sample_problem().with_slots(
            SlotGrid::new()
                .with_day("Mon")
                .with_time("08:00")
                .with_break(Break::every_day("08:00")),
        );
        assert!(validate_problem(&p).is_ok());
    }

    #[test]
    fn test_unteachable_subject() {
        let p = sample_problem()
            .with_subject(Subject::lecture("hist", "History"))
            .with_group(Group::new("G3").with_subject("hist"));
        let errors = validate_problem(&p).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnteachableSubject
                && e.message.contains("hist")));
    }

    #[test]
    fn test_unteachable_not_reported_for_unknown_subject() {
        // An unknown enrollment is reported once, as UnknownSubject only
        let p = sample_problem().with_group(Group::new("G2").with_subject("bio"));
        let errors = validate_problem(&p).unwrap_err();
        assert!(!errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnteachableSubject));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let p = Problem::new()
            .with_group(Group::new("G1").with_subject("ghost"))
            .with_slots(SlotGrid::new());
        let errors = validate_problem(&p).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
