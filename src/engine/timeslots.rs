use crate::model::{CalendarConfig, Course, CourseId, Period, Section, Teacher, TeacherId};
use std::collections::{HashMap, HashSet};

// Reusing a slot within one course starves students of alternatives;
// a same-grade collision can make two required courses mutually exclusive.
const SAME_COURSE_PENALTY: u32 = 1000;
const GRADE_CLASH_PENALTY: u32 = 500;

/// Per-grade usage counts: grade -> slot -> sections placed.
struct GradeLedger {
    usage: HashMap<u8, Vec<u32>>,
    slots: usize,
}

impl GradeLedger {
    fn new(slots: usize) -> Self {
        Self {
            usage: HashMap::new(),
            slots,
        }
    }

    fn record(&mut self, grades: Option<&Vec<u8>>, slot: u8) {
        if let Some(grades) = grades {
            for grade in grades {
                let counts = self
                    .usage
                    .entry(*grade)
                    .or_insert_with(|| vec![0; self.slots]);
                counts[slot as usize] += 1;
            }
        }
    }

    fn penalty(&self, grades: Option<&Vec<u8>>, slot: u8) -> u32 {
        let Some(grades) = grades else { return 0 };
        grades
            .iter()
            .map(|g| {
                self.usage
                    .get(g)
                    .map(|counts| counts[slot as usize])
                    .unwrap_or(0)
                    * GRADE_CLASH_PENALTY
            })
            .sum()
    }
}

/// Phase 2: pick one slot-of-day per section and fix it across the week.
///
/// Courses are processed in input order, each course's sections in order.
/// A slot is feasible when the section's teacher is free at that slot on
/// every weekday; among feasible slots the penalty-minimal one wins, ties
/// to the smallest index. When nothing is feasible the section lands on
/// slot 0 and the audit reports the collision.
pub fn assign_slots(
    sections: &mut [Section],
    courses: &[Course],
    teachers: &[Teacher],
    config: &CalendarConfig,
) {
    // Occupancy is seeded with each teacher's unavailable periods so one
    // membership test covers both commitments and absence.
    let mut occupied: HashMap<&TeacherId, HashSet<Period>> = teachers
        .iter()
        .map(|t| (&t.id, t.unavailable.iter().copied().collect()))
        .collect();

    let mut slot_usage: Vec<u32> = vec![0; config.periods_per_day as usize];
    let mut grades = GradeLedger::new(config.periods_per_day as usize);

    let course_map: HashMap<&CourseId, &Course> = courses.iter().map(|c| (&c.id, c)).collect();

    for (course_id, section_indices) in group_by_course(sections, courses) {
        let restrictions = course_map
            .get(&course_id)
            .and_then(|c| c.grade_restrictions.as_ref());
        let mut course_used: HashSet<u8> = HashSet::new();

        for idx in section_indices {
            let teacher_busy = sections[idx]
                .teacher_id
                .as_ref()
                .and_then(|tid| occupied.get(tid));

            let slot = pick_slot(
                config,
                teacher_busy,
                &slot_usage,
                &course_used,
                restrictions,
                &grades,
            )
            .unwrap_or(0);

            let week: Vec<Period> = (0..config.days_per_week)
                .map(|day| Period::new(day, slot))
                .collect();

            if let Some(tid) = sections[idx].teacher_id.clone() {
                if let Some(busy) = occupied.get_mut(&tid) {
                    busy.extend(week.iter().copied());
                }
            }
            slot_usage[slot as usize] += 1;
            course_used.insert(slot);
            grades.record(restrictions, slot);

            sections[idx].periods = week;
        }
    }
}

fn pick_slot(
    config: &CalendarConfig,
    teacher_busy: Option<&HashSet<Period>>,
    slot_usage: &[u32],
    course_used: &HashSet<u8>,
    restrictions: Option<&Vec<u8>>,
    grades: &GradeLedger,
) -> Option<u8> {
    (0..config.periods_per_day)
        .filter(|&slot| match teacher_busy {
            Some(busy) => {
                (0..config.days_per_week).all(|day| !busy.contains(&Period::new(day, slot)))
            }
            None => true,
        })
        // min_by_key keeps the first minimum, so ties break to the
        // smallest slot index
        .min_by_key(|&slot| {
            let mut penalty = slot_usage[slot as usize];
            if course_used.contains(&slot) {
                penalty += SAME_COURSE_PENALTY;
            }
            penalty + grades.penalty(restrictions, slot)
        })
}

/// Section indices grouped per course, in course input order; sections of
/// unknown courses trail in their own groups.
fn group_by_course(sections: &[Section], courses: &[Course]) -> Vec<(CourseId, Vec<usize>)> {
    let mut by_course: HashMap<&CourseId, Vec<usize>> = HashMap::new();
    for (idx, section) in sections.iter().enumerate() {
        by_course.entry(&section.course_id).or_default().push(idx);
    }

    let mut groups = Vec::new();
    for course in courses {
        if let Some(indices) = by_course.remove(&course.id) {
            groups.push((course.id.clone(), indices));
        }
    }

    let mut strays: Vec<(CourseId, Vec<usize>)> = by_course
        .into_iter()
        .map(|(id, indices)| (id.clone(), indices))
        .collect();
    strays.sort_by_key(|(_, indices)| indices[0]);
    groups.extend(strays);

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionId;

    fn course(id: &str, sections: u8, grades: Option<Vec<u8>>) -> Course {
        Course {
            id: CourseId::new(id),
            name: String::new(),
            max_students: 30,
            periods_per_week: 5,
            grade_restrictions: grades,
            required_features: vec![],
            sections,
        }
    }

    fn teacher(id: &str, subjects: &[&str], unavailable: Vec<Period>) -> Teacher {
        Teacher {
            id: TeacherId::new(id),
            name: String::new(),
            subjects: subjects.iter().map(|s| CourseId::new(*s)).collect(),
            max_sections: 8,
            unavailable,
        }
    }

    fn section(id: &str, course: &str, teacher: Option<&str>) -> Section {
        let mut s = Section::new(SectionId::new(id), CourseId::new(course), 30);
        s.teacher_id = teacher.map(TeacherId::new);
        s
    }

    fn config(periods_per_day: u8, days_per_week: u8) -> CalendarConfig {
        CalendarConfig {
            periods_per_day,
            days_per_week,
        }
    }

    #[test]
    fn slot_replicates_across_all_days() {
        let courses = vec![course("alg", 1, None)];
        let teachers = vec![teacher("t1", &["alg"], vec![])];
        let mut sections = vec![section("alg-1", "alg", Some("t1"))];

        assign_slots(&mut sections, &courses, &teachers, &config(4, 5));

        assert_eq!(sections[0].periods.len(), 5);
        let slot = sections[0].periods[0].slot;
        assert!(sections[0].periods.iter().all(|p| p.slot == slot));
        let days: Vec<u8> = sections[0].periods.iter().map(|p| p.day).collect();
        assert_eq!(days, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn same_course_sections_spread_over_slots() {
        let courses = vec![course("alg", 2, None)];
        let teachers = vec![teacher("t1", &["alg"], vec![])];
        let mut sections = vec![
            section("alg-1", "alg", Some("t1")),
            section("alg-2", "alg", Some("t1")),
        ];

        assign_slots(&mut sections, &courses, &teachers, &config(4, 5));

        assert_ne!(sections[0].periods[0].slot, sections[1].periods[0].slot);
    }

    #[test]
    fn grade_restricted_courses_avoid_each_other() {
        let courses = vec![
            course("gov", 1, Some(vec![12])),
            course("eng12", 1, Some(vec![12])),
        ];
        let teachers = vec![
            teacher("t1", &["gov"], vec![]),
            teacher("t2", &["eng12"], vec![]),
        ];
        let mut sections = vec![
            section("gov-1", "gov", Some("t1")),
            section("eng12-1", "eng12", Some("t2")),
        ];

        assign_slots(&mut sections, &courses, &teachers, &config(4, 5));

        assert_ne!(sections[0].periods[0].slot, sections[1].periods[0].slot);
    }

    #[test]
    fn unavailable_slot_is_skipped() {
        let courses = vec![course("alg", 1, None)];
        let blocked: Vec<Period> = (0..5).map(|d| Period::new(d, 0)).collect();
        let teachers = vec![teacher("t1", &["alg"], blocked)];
        let mut sections = vec![section("alg-1", "alg", Some("t1"))];

        assign_slots(&mut sections, &courses, &teachers, &config(2, 5));

        assert!(sections[0].periods.iter().all(|p| p.slot == 1));
    }

    #[test]
    fn exhausted_teacher_falls_back_to_slot_zero() {
        // Two slots, three sections, one teacher: the third has nowhere to go.
        let courses = vec![course("alg", 3, None)];
        let teachers = vec![teacher("t1", &["alg"], vec![])];
        let mut sections = vec![
            section("alg-1", "alg", Some("t1")),
            section("alg-2", "alg", Some("t1")),
            section("alg-3", "alg", Some("t1")),
        ];

        assign_slots(&mut sections, &courses, &teachers, &config(2, 5));

        assert_eq!(sections[2].periods[0].slot, 0);
    }

    #[test]
    fn ties_break_to_smallest_slot() {
        let courses = vec![course("alg", 1, None)];
        let mut sections = vec![section("alg-1", "alg", None)];

        assign_slots(&mut sections, &courses, &[], &config(8, 5));

        assert_eq!(sections[0].periods[0].slot, 0);
    }
}
