use crate::model::{Course, CourseId, Period, Section, Student, StudentId, Unassigned};
use std::collections::{HashMap, HashSet};

pub const GREEDY_UNPLACED_REASON: &str = "No available section (conflict or capacity)";

enum Placement {
    Placed,
    NoSeat,
    Skipped,
}

/// Two-pass greedy assignment: everyone's required courses first, then
/// elective preferences. Elective misses are silent; required misses are
/// reported.
pub fn greedy_enroll(
    sections: &mut [Section],
    students: &[Student],
    courses: &[Course],
) -> Vec<Unassigned> {
    let course_map: HashMap<&CourseId, &Course> = courses.iter().map(|c| (&c.id, c)).collect();

    let mut sections_by_course: HashMap<CourseId, Vec<usize>> = HashMap::new();
    for (k, section) in sections.iter().enumerate() {
        sections_by_course
            .entry(section.course_id.clone())
            .or_default()
            .push(k);
    }

    let mut busy: HashMap<&StudentId, HashSet<Period>> = HashMap::new();
    let mut unassigned = Vec::new();

    for student in students {
        for course_id in &student.required_courses {
            let outcome = try_place(
                sections,
                &sections_by_course,
                &course_map,
                student,
                course_id,
                &mut busy,
            );
            if let Placement::NoSeat = outcome {
                unassigned.push(Unassigned {
                    student_id: student.id.clone(),
                    course_id: course_id.clone(),
                    reason: GREEDY_UNPLACED_REASON.to_string(),
                });
            }
        }
    }

    for student in students {
        for course_id in &student.elective_preferences {
            let _ = try_place(
                sections,
                &sections_by_course,
                &course_map,
                student,
                course_id,
                &mut busy,
            );
        }
    }

    unassigned
}

fn try_place<'s>(
    sections: &mut [Section],
    sections_by_course: &HashMap<CourseId, Vec<usize>>,
    course_map: &HashMap<&CourseId, &Course>,
    student: &'s Student,
    course_id: &CourseId,
    busy: &mut HashMap<&'s StudentId, HashSet<Period>>,
) -> Placement {
    // Unknown courses and excluded grades are skipped without a report
    let Some(course) = course_map.get(course_id) else {
        return Placement::Skipped;
    };
    if !course.admits_grade(student.grade) {
        return Placement::Skipped;
    }

    let candidates = sections_by_course
        .get(course_id)
        .map(|v| v.as_slice())
        .unwrap_or(&[]);

    // A duplicate listing must not enroll twice
    if candidates.iter().any(|&k| sections[k].has_student(&student.id)) {
        return Placement::Skipped;
    }

    // Emptiest section first; stable sort keeps input order on ties
    let mut ordered: Vec<usize> = candidates.to_vec();
    ordered.sort_by_key(|&k| sections[k].headcount());

    let taken = busy.entry(&student.id).or_default();

    for k in ordered {
        if sections[k].at_capacity() {
            continue;
        }
        if sections[k].periods.iter().any(|p| taken.contains(p)) {
            continue;
        }
        taken.extend(sections[k].periods.iter().copied());
        sections[k].admit(student.id.clone());
        return Placement::Placed;
    }

    Placement::NoSeat
}
