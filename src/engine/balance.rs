use crate::model::{CourseId, Period, Section, StudentId};
use itertools::{Itertools, MinMaxResult};
use std::collections::{HashMap, HashSet};

// Score coefficients; informational only, the score never steers a phase.
const EMPTY_SECTION_COST: f64 = 5.0;
const SPREAD_COST: f64 = 0.5;
const MISSING_ROOM_COST: f64 = 10.0;
const MISSING_TEACHER_COST: f64 = 10.0;

/// Phase 5: local-search rebalancing.
///
/// Each pass visits every multi-section course and tries to move one
/// student from its fullest to its emptiest section, provided the target
/// has a seat and the student's other commitments leave those periods
/// free. Stops after `max_iterations` passes or the first pass with no
/// move.
pub fn rebalance(mut sections: Vec<Section>, max_iterations: u32) -> Vec<Section> {
    let mut busy = student_period_sets(&sections);
    let groups = course_groups(&sections);

    for _ in 0..max_iterations {
        let mut moved = false;

        for (_, indices) in &groups {
            if indices.len() < 2 {
                continue;
            }

            let (smallest, largest) = extremes(&sections, indices);
            if sections[largest].headcount() <= sections[smallest].headcount() + 1 {
                continue;
            }
            if sections[smallest].at_capacity() {
                continue;
            }

            let source: HashSet<Period> = sections[largest].periods.iter().copied().collect();
            let target: HashSet<Period> = sections[smallest].periods.iter().copied().collect();
            let donors = sections[largest].enrolled_students.clone();

            for student_id in donors {
                let schedule = busy.entry(student_id.clone()).or_default();
                // Drop the donor section's periods, then see whether the
                // target section fits in what remains
                let remainder: HashSet<Period> =
                    schedule.difference(&source).copied().collect();
                if target.iter().any(|p| remainder.contains(p)) {
                    continue;
                }

                sections[largest].withdraw(&student_id);
                sections[smallest].admit(student_id.clone());
                *schedule = remainder.union(&target).copied().collect();
                moved = true;
                break;
            }
        }

        if !moved {
            break;
        }
    }

    sections
}

/// Scalar schedule quality in [0, 100].
pub fn score_schedule(sections: &[Section]) -> f64 {
    let empty = sections.iter().filter(|s| s.headcount() == 0).count();
    let roomless = sections.iter().filter(|s| s.room_id.is_none()).count();
    let teacherless = sections.iter().filter(|s| s.teacher_id.is_none()).count();

    let spread: f64 = course_groups(sections)
        .iter()
        .map(|(_, indices)| {
            match indices.iter().map(|&k| sections[k].headcount()).minmax() {
                MinMaxResult::MinMax(min, max) => (max - min) as f64,
                _ => 0.0,
            }
        })
        .sum();

    let score = 100.0
        - EMPTY_SECTION_COST * empty as f64
        - SPREAD_COST * spread
        - MISSING_ROOM_COST * roomless as f64
        - MISSING_TEACHER_COST * teacherless as f64;

    score.clamp(0.0, 100.0)
}

fn student_period_sets(sections: &[Section]) -> HashMap<StudentId, HashSet<Period>> {
    let mut busy: HashMap<StudentId, HashSet<Period>> = HashMap::new();
    for section in sections {
        for student_id in &section.enrolled_students {
            busy.entry(student_id.clone())
                .or_default()
                .extend(section.periods.iter().copied());
        }
    }
    busy
}

/// Section indices per course, first-seen order.
fn course_groups(sections: &[Section]) -> Vec<(CourseId, Vec<usize>)> {
    let mut order: Vec<CourseId> = Vec::new();
    let mut groups: HashMap<CourseId, Vec<usize>> = HashMap::new();
    for (k, section) in sections.iter().enumerate() {
        if !groups.contains_key(&section.course_id) {
            order.push(section.course_id.clone());
        }
        groups.entry(section.course_id.clone()).or_default().push(k);
    }
    order
        .into_iter()
        .map(|course_id| {
            let indices = groups.remove(&course_id).unwrap_or_default();
            (course_id, indices)
        })
        .collect()
}

/// First-encountered emptiest and fullest section of a course.
fn extremes(sections: &[Section], indices: &[usize]) -> (usize, usize) {
    let mut smallest = indices[0];
    let mut largest = indices[0];
    for &k in &indices[1..] {
        if sections[k].headcount() < sections[smallest].headcount() {
            smallest = k;
        }
        if sections[k].headcount() > sections[largest].headcount() {
            largest = k;
        }
    }
    (smallest, largest)
}
