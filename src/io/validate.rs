use crate::error::{Result, TimetableError};
use crate::model::{CourseId, SchedulingInput};
use std::collections::{HashMap, HashSet};

/// Outcome of input validation. Errors abort the run before the engine
/// starts; warnings are informational.
#[derive(Debug, Default)]
pub struct InputReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl InputReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

/// Referential and sanity checks on a loaded input set.
///
/// Courses with no qualified teacher and unreachable capacities are
/// warnings, not errors: the engine tolerates both and the audit reports
/// the fallout.
pub fn validate_input(input: &SchedulingInput) -> Result<InputReport> {
    let mut report = InputReport::default();

    check_duplicates(input, &mut report);

    let known: HashSet<&CourseId> = input.courses.iter().map(|c| &c.id).collect();

    for student in &input.students {
        for course_id in student.requested_courses() {
            if !known.contains(course_id) {
                report.error(format!(
                    "student '{}' references unknown course '{}'",
                    student.id, course_id
                ));
            }
        }
        if !(1..=12).contains(&student.grade) {
            report.warn(format!(
                "student '{}' has unusual grade {}",
                student.id, student.grade
            ));
        }
    }

    for teacher in &input.teachers {
        for course_id in &teacher.subjects {
            if !known.contains(course_id) {
                report.warn(format!(
                    "teacher '{}' lists unknown course '{}' in subjects",
                    teacher.id, course_id
                ));
            }
        }
    }

    let mut teacher_count: HashMap<&CourseId, usize> = HashMap::new();
    for teacher in &input.teachers {
        for course_id in &teacher.subjects {
            *teacher_count.entry(course_id).or_insert(0) += 1;
        }
    }
    for course in &input.courses {
        if !teacher_count.contains_key(&course.id) {
            report.warn(format!("course '{}' has no qualified teachers", course.id));
        }
    }

    let largest_room = input.rooms.iter().map(|r| r.capacity).max().unwrap_or(0);
    for course in &input.courses {
        if course.max_students > largest_room {
            report.warn(format!(
                "course '{}' wants {} seats but the largest room holds {}",
                course.id, course.max_students, largest_room
            ));
        }
    }

    if !report.is_clean() {
        return Err(TimetableError::InvalidInput {
            count: report.errors.len(),
            details: report.errors.join("\n"),
        }
        .into());
    }

    Ok(report)
}

fn check_duplicates(input: &SchedulingInput, report: &mut InputReport) {
    let mut seen = HashSet::new();
    for student in &input.students {
        if !seen.insert(&student.id.0) {
            report.error(format!("duplicate student id '{}'", student.id));
        }
    }

    let mut seen = HashSet::new();
    for teacher in &input.teachers {
        if !seen.insert(&teacher.id.0) {
            report.error(format!("duplicate teacher id '{}'", teacher.id));
        }
    }

    let mut seen = HashSet::new();
    for course in &input.courses {
        if !seen.insert(&course.id.0) {
            report.error(format!("duplicate course id '{}'", course.id));
        }
    }

    let mut seen = HashSet::new();
    for room in &input.rooms {
        if !seen.insert(&room.id.0) {
            report.error(format!("duplicate room id '{}'", room.id));
        }
    }
}
