//! First-fit greedy timetable solver.
//!
//! # Algorithm
//!
//! 1. Expand demands: one per (group, enrolled subject, weekly occurrence),
//!    ordered by the placement policy.
//! 2. For each demand, scan qualified teachers in declaration order, then
//!    (day, time) slots in grid order, then rooms in declaration order.
//! 3. Seat the meeting at the first position where the slot is not a
//!    break, teacher / group / room are free, the teacher's consecutive
//!    run and the group's daily load stay within limits, and the room
//!    suits the subject and holds the group.
//! 4. Demands with no feasible position are recorded as unplaced.
//!
//! # Complexity
//! O(n * t * s * r) where n=demands, t=teachers, s=slots, r=rooms.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

use std::collections::{HashMap, HashSet};

use crate::models::{Group, Meeting, Problem, Subject, Timetable, Unplaced};

/// Order in which demands are attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementOrder {
    /// Group declaration order, then enrollment order within a group.
    #[default]
    Enrollment,
    /// Largest group first; hardest-to-seat cohorts get first pick of
    /// rooms (stable within equal sizes).
    LargestGroupFirst,
}

/// First-fit greedy solver.
///
/// Deterministic: identical input always produces an identical timetable.
/// Infeasible demands never fail the solve; they are returned as
/// [`Unplaced`] entries on the timetable.
///
/// # Example
///
/// ```
/// use timetabler::models::{Group, Problem, Room, SlotGrid, Subject, Teacher};
/// use timetabler::solver::GreedySolver;
///
/// let problem = Problem::new()
///     .with_room(Room::lecture("R1"))
///     .with_teacher(Teacher::new("t1").with_subject("math"))
///     .with_subject(Subject::lecture("math", "Mathematics"))
///     .with_group(Group::new("G1").with_size(20).with_subject("math"))
///     .with_slots(SlotGrid::new().with_day("Mon").with_time("08:00"));
///
/// let timetable = GreedySolver::new().solve(&problem);
/// assert_eq!(timetable.meeting_count(), 1);
/// assert!(timetable.is_complete());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedySolver {
    order: PlacementOrder,
}

/// One (group, subject, occurrence) requirement to seat.
struct Demand<'a> {
    group: &'a Group,
    subject: &'a Subject,
    occurrence: u32,
}

/// Occupancy state built up during placement. Keys are entity IDs,
/// values are occupied (day index, time index) slots.
struct Occupancy {
    blocked: HashSet<(usize, usize)>,
    teacher_busy: HashMap<String, HashSet<(usize, usize)>>,
    room_busy: HashMap<String, HashSet<(usize, usize)>>,
    group_busy: HashMap<String, HashSet<(usize, usize)>>,
}

impl Occupancy {
    fn new(problem: &Problem) -> Self {
        let mut blocked = HashSet::new();
        for (di, day) in problem.slots.days.iter().enumerate() {
            for (ti, time) in problem.slots.times.iter().enumerate() {
                if problem.slots.is_blocked(day, time) {
                    blocked.insert((di, ti));
                }
            }
        }
        Self {
            blocked,
            teacher_busy: HashMap::new(),
            room_busy: HashMap::new(),
            group_busy: HashMap::new(),
        }
    }

    fn teacher_free(&self, teacher_id: &str, slot: (usize, usize)) -> bool {
        !self
            .teacher_busy
            .get(teacher_id)
            .is_some_and(|s| s.contains(&slot))
    }

    fn room_free(&self, room_id: &str, slot: (usize, usize)) -> bool {
        !self
            .room_busy
            .get(room_id)
            .is_some_and(|s| s.contains(&slot))
    }

    fn group_free(&self, group_id: &str, slot: (usize, usize)) -> bool {
        !self
            .group_busy
            .get(group_id)
            .is_some_and(|s| s.contains(&slot))
    }

    /// Time indices the teacher occupies on the given day.
    fn teacher_times_on(&self, teacher_id: &str, day: usize) -> Vec<usize> {
        self.teacher_busy
            .get(teacher_id)
            .map(|slots| {
                slots
                    .iter()
                    .filter(|(d, _)| *d == day)
                    .map(|(_, t)| *t)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of meetings the group already has on the given day.
    fn group_load_on(&self, group_id: &str, day: usize) -> usize {
        self.group_busy
            .get(group_id)
            .map(|slots| slots.iter().filter(|(d, _)| *d == day).count())
            .unwrap_or(0)
    }

    fn occupy(&mut self, teacher_id: &str, room_id: &str, group_id: &str, slot: (usize, usize)) {
        self.teacher_busy
            .entry(teacher_id.to_string())
            .or_default()
            .insert(slot);
        self.room_busy
            .entry(room_id.to_string())
            .or_default()
            .insert(slot);
        self.group_busy
            .entry(group_id.to_string())
            .or_default()
            .insert(slot);
    }
}

impl GreedySolver {
    /// Creates a solver with the default (enrollment) placement order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placement order.
    pub fn with_order(mut self, order: PlacementOrder) -> Self {
        self.order = order;
        self
    }

    /// Solves the problem, producing a timetable.
    ///
    /// Never fails: demands with no feasible position are recorded as
    /// unplaced on the returned timetable.
    pub fn solve(&self, problem: &Problem) -> Timetable {
        let mut timetable = Timetable::new();
        let mut occupancy = Occupancy::new(problem);

        for demand in self.demands(problem, &mut timetable) {
            if problem.teachers_for(&demand.subject.id).next().is_none() {
                timetable.add_unplaced(Unplaced {
                    group: demand.group.id.clone(),
                    subject: demand.subject.id.clone(),
                    occurrence: demand.occurrence,
                    reason: "no qualified teacher".into(),
                });
                continue;
            }

            match self.place(problem, &demand, &mut occupancy) {
                Some(meeting) => timetable.add_meeting(meeting),
                None => timetable.add_unplaced(Unplaced {
                    group: demand.group.id.clone(),
                    subject: demand.subject.id.clone(),
                    occurrence: demand.occurrence,
                    reason: "no feasible slot".into(),
                }),
            }
        }

        timetable.sort();
        timetable
    }

    /// Expands enrollments into individual demands, in placement order.
    ///
    /// Enrollments in subjects that are not declared are recorded as
    /// unplaced here, before placement starts.
    fn demands<'a>(&self, problem: &'a Problem, timetable: &mut Timetable) -> Vec<Demand<'a>> {
        let mut demands = Vec::new();
        for group in &problem.groups {
            for sid in &group.subjects {
                match problem.subject(sid) {
                    Some(subject) => {
                        for occurrence in 1..=subject.classes_per_week {
                            demands.push(Demand {
                                group,
                                subject,
                                occurrence,
                            });
                        }
                    }
                    None => timetable.add_unplaced(Unplaced {
                        group: group.id.clone(),
                        subject: sid.clone(),
                        occurrence: 1,
                        reason: "unknown subject".into(),
                    }),
                }
            }
        }

        if self.order == PlacementOrder::LargestGroupFirst {
            demands.sort_by(|a, b| b.group.size.cmp(&a.group.size));
        }
        demands
    }

    /// Finds the first feasible (teacher, slot, room) position for a demand
    /// and occupies it.
    fn place(&self, problem: &Problem, demand: &Demand, occupancy: &mut Occupancy) -> Option<Meeting> {
        let max_consecutive = problem.constraints.maximum_consecutive_classes as usize;
        let daily_cap = problem.constraints.maximum_slot_per_group_per_day;

        for teacher in problem.teachers_for(&demand.subject.id) {
            for (di, day) in problem.slots.days.iter().enumerate() {
                if daily_cap
                    .is_some_and(|cap| occupancy.group_load_on(&demand.group.id, di) >= cap as usize)
                {
                    continue;
                }

                for (ti, time) in problem.slots.times.iter().enumerate() {
                    let slot = (di, ti);
                    if occupancy.blocked.contains(&slot)
                        || !occupancy.teacher_free(&teacher.id, slot)
                        || !occupancy.group_free(&demand.group.id, slot)
                    {
                        continue;
                    }

                    let mut day_times = occupancy.teacher_times_on(&teacher.id, di);
                    day_times.push(ti);
                    if longest_consecutive_run(&mut day_times) > max_consecutive {
                        continue;
                    }

                    for room in &problem.rooms {
                        if !room.suits(demand.subject)
                            || !occupancy.room_free(&room.id, slot)
                            || !room.fits(demand.group.size)
                        {
                            continue;
                        }

                        occupancy.occupy(&teacher.id, &room.id, &demand.group.id, slot);
                        return Some(Meeting {
                            day: day.clone(),
                            time: time.clone(),
                            subject_id: demand.subject.id.clone(),
                            subject: demand.subject.label().to_string(),
                            teacher_id: teacher.id.clone(),
                            teacher: teacher.label().to_string(),
                            room: room.id.clone(),
                            groups: vec![demand.group.id.clone()],
                        });
                    }
                }
            }
        }
        None
    }
}

/// Longest run of consecutive indices after sorting. Returns 0 for an
/// empty slice.
fn longest_consecutive_run(indices: &mut [usize]) -> usize {
    if indices.is_empty() {
        return 0;
    }
    indices.sort_unstable();

    let mut best = 1;
    let mut current = 1;
    for w in indices.windows(2) {
        if w[1] == w[0] + 1 {
            current += 1;
            best = best.max(current);
        } else {
            current = 1;
        }
    }
    best
}
