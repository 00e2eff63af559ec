use crate::audit::Violation;
use crate::model::{
    ConstraintTag, Course, CourseId, Period, Room, RoomId, Schedule, SchedulingInput, Teacher,
    TeacherId,
};
use std::collections::{HashMap, HashSet};

/// Every teachered section's course must be in the teacher's subject set.
pub fn check_teacher_qualifications(
    schedule: &Schedule,
    input: &SchedulingInput,
) -> Vec<Violation> {
    let teachers: HashMap<&TeacherId, &Teacher> =
        input.teachers.iter().map(|t| (&t.id, t)).collect();
    let mut violations = Vec::new();

    for section in &schedule.sections {
        let Some(teacher_id) = &section.teacher_id else { continue };
        let qualified = teachers
            .get(teacher_id)
            .map(|t| t.qualified_for(&section.course_id))
            .unwrap_or(false);
        if !qualified {
            violations.push(Violation::new(
                ConstraintTag::TeacherQualified,
                format!(
                    "teacher '{}' is not qualified for section '{}'",
                    teacher_id, section.id
                ),
            ));
        }
    }

    violations
}

/// No teacher may hold two sections meeting at the same period.
pub fn check_teacher_overlaps(schedule: &Schedule) -> Vec<Violation> {
    let mut taken: HashMap<&TeacherId, HashSet<Period>> = HashMap::new();
    let mut violations = Vec::new();

    for section in &schedule.sections {
        let Some(teacher_id) = &section.teacher_id else { continue };
        let periods = taken.entry(teacher_id).or_default();
        for period in &section.periods {
            if !periods.insert(*period) {
                violations.push(Violation::new(
                    ConstraintTag::NoTeacherConflict,
                    format!("teacher '{}' double-booked at {}", teacher_id, period),
                ));
            }
        }
    }

    violations
}

/// Sections must avoid their teacher's unavailable periods.
pub fn check_teacher_availability(schedule: &Schedule, input: &SchedulingInput) -> Vec<Violation> {
    let teachers: HashMap<&TeacherId, &Teacher> =
        input.teachers.iter().map(|t| (&t.id, t)).collect();
    let mut violations = Vec::new();

    for section in &schedule.sections {
        let Some(teacher_id) = &section.teacher_id else { continue };
        let Some(teacher) = teachers.get(teacher_id) else { continue };
        for period in &section.periods {
            if !teacher.free_at(*period) {
                violations.push(Violation::new(
                    ConstraintTag::TeacherAvailability,
                    format!(
                        "section '{}' meets at {} while teacher '{}' is unavailable",
                        section.id, period, teacher_id
                    ),
                ));
            }
        }
    }

    violations
}

/// Teacher load must stay within `max_sections`.
pub fn check_teacher_load(schedule: &Schedule, input: &SchedulingInput) -> Vec<Violation> {
    let mut load: HashMap<&TeacherId, usize> = HashMap::new();
    for section in &schedule.sections {
        if let Some(teacher_id) = &section.teacher_id {
            *load.entry(teacher_id).or_insert(0) += 1;
        }
    }

    let mut violations = Vec::new();
    for teacher in &input.teachers {
        let held = load.get(&teacher.id).copied().unwrap_or(0);
        if held > teacher.max_sections as usize {
            violations.push(Violation::new(
                ConstraintTag::TeacherMaxSections,
                format!(
                    "teacher '{}' holds {} sections, max is {}",
                    teacher.id, held, teacher.max_sections
                ),
            ));
        }
    }

    violations
}

/// No room may host two sections at the same period.
pub fn check_room_overlaps(schedule: &Schedule) -> Vec<Violation> {
    let mut taken: HashMap<&RoomId, HashSet<Period>> = HashMap::new();
    let mut violations = Vec::new();

    for section in &schedule.sections {
        let Some(room_id) = &section.room_id else { continue };
        let periods = taken.entry(room_id).or_default();
        for period in &section.periods {
            if !periods.insert(*period) {
                violations.push(Violation::new(
                    ConstraintTag::NoRoomConflict,
                    format!("room '{}' double-booked at {}", room_id, period),
                ));
            }
        }
    }

    violations
}

/// Sections must avoid their room's unavailable periods.
pub fn check_room_availability(schedule: &Schedule, input: &SchedulingInput) -> Vec<Violation> {
    let rooms: HashMap<&RoomId, &Room> = input.rooms.iter().map(|r| (&r.id, r)).collect();
    let mut violations = Vec::new();

    for section in &schedule.sections {
        let Some(room_id) = &section.room_id else { continue };
        let Some(room) = rooms.get(room_id) else { continue };
        for period in &section.periods {
            if !room.free_at(*period) {
                violations.push(Violation::new(
                    ConstraintTag::NoRoomConflict,
                    format!(
                        "section '{}' meets at {} while room '{}' is unavailable",
                        section.id, period, room_id
                    ),
                ));
            }
        }
    }

    violations
}

/// Assigned rooms must cover the course's features and the section's
/// capacity.
pub fn check_room_suitability(schedule: &Schedule, input: &SchedulingInput) -> Vec<Violation> {
    let rooms: HashMap<&RoomId, &Room> = input.rooms.iter().map(|r| (&r.id, r)).collect();
    let courses: HashMap<&CourseId, &Course> = input.courses.iter().map(|c| (&c.id, c)).collect();
    let mut violations = Vec::new();

    for section in &schedule.sections {
        let Some(room_id) = &section.room_id else { continue };
        let Some(room) = rooms.get(room_id) else { continue };

        if room.capacity < section.capacity {
            violations.push(Violation::new(
                ConstraintTag::RoomCapacity,
                format!(
                    "room '{}' holds {} but section '{}' needs {}",
                    room_id, room.capacity, section.id, section.capacity
                ),
            ));
        }

        if let Some(course) = courses.get(&section.course_id) {
            if !room.covers(&course.required_features) {
                violations.push(Violation::new(
                    ConstraintTag::RoomFeatures,
                    format!(
                        "room '{}' lacks features required by section '{}'",
                        room_id, section.id
                    ),
                ));
            }
        }
    }

    violations
}

/// No student may sit in two sections sharing a period.
pub fn check_student_overlaps(schedule: &Schedule) -> Vec<Violation> {
    let mut taken: HashMap<&str, HashSet<Period>> = HashMap::new();
    let mut violations = Vec::new();

    for section in &schedule.sections {
        for student_id in &section.enrolled_students {
            let periods = taken.entry(student_id.as_str()).or_default();
            for period in &section.periods {
                if !periods.insert(*period) {
                    violations.push(Violation::new(
                        ConstraintTag::NoStudentConflict,
                        format!("student '{}' double-booked at {}", student_id, period),
                    ));
                }
            }
        }
    }

    violations
}

/// Each student at most once per course.
pub fn check_single_enrollment_per_course(schedule: &Schedule) -> Vec<Violation> {
    let mut seen: HashSet<(&str, &CourseId)> = HashSet::new();
    let mut violations = Vec::new();

    for section in &schedule.sections {
        for student_id in &section.enrolled_students {
            if !seen.insert((student_id.as_str(), &section.course_id)) {
                violations.push(Violation::new(
                    ConstraintTag::NoStudentConflict,
                    format!(
                        "student '{}' enrolled twice in course '{}'",
                        student_id, section.course_id
                    ),
                ));
            }
        }
    }

    violations
}

/// Grade-restricted courses admit only the listed grades.
pub fn check_grade_eligibility(schedule: &Schedule, input: &SchedulingInput) -> Vec<Violation> {
    let courses: HashMap<&CourseId, &Course> = input.courses.iter().map(|c| (&c.id, c)).collect();
    let grades: HashMap<&str, u8> = input
        .students
        .iter()
        .map(|s| (s.id.as_str(), s.grade))
        .collect();
    let mut violations = Vec::new();

    for section in &schedule.sections {
        let Some(course) = courses.get(&section.course_id) else { continue };
        for student_id in &section.enrolled_students {
            let Some(&grade) = grades.get(student_id.as_str()) else { continue };
            if !course.admits_grade(grade) {
                violations.push(Violation::new(
                    ConstraintTag::GradeRestriction,
                    format!(
                        "grade-{} student '{}' enrolled in restricted course '{}'",
                        grade, student_id, course.id
                    ),
                ));
            }
        }
    }

    violations
}

/// Rosters must fit the nominal capacity.
pub fn check_section_capacity(schedule: &Schedule) -> Vec<Violation> {
    schedule
        .sections
        .iter()
        .filter(|s| s.headcount() > s.capacity as usize)
        .map(|s| {
            Violation::new(
                ConstraintTag::RoomCapacity,
                format!(
                    "section '{}' over capacity: {} enrolled, {} seats",
                    s.id,
                    s.headcount(),
                    s.capacity
                ),
            )
        })
        .collect()
}

/// Every unassigned entry must name a course its student actually asked
/// for.
pub fn check_unassigned_references(schedule: &Schedule, input: &SchedulingInput) -> Vec<Violation> {
    let mut violations = Vec::new();

    for entry in &schedule.unassigned {
        let requested = input
            .students
            .iter()
            .find(|s| s.id == entry.student_id)
            .map(|s| s.requested(&entry.course_id))
            .unwrap_or(false);
        if !requested {
            violations.push(Violation::new(
                ConstraintTag::Custom("UNASSIGNED_REFERENCE".to_string()),
                format!(
                    "unassigned entry pairs student '{}' with unrequested course '{}'",
                    entry.student_id, entry.course_id
                ),
            ));
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ScheduleMetadata, Section, SectionId, StudentId};

    fn schedule_of(sections: Vec<Section>) -> Schedule {
        Schedule {
            sections,
            unassigned: vec![],
            metadata: ScheduleMetadata::default(),
        }
    }

    fn section(id: &str, course: &str, teacher: Option<&str>, slot: u8) -> Section {
        let mut s = Section::new(SectionId::new(id), CourseId::new(course), 30);
        s.teacher_id = teacher.map(TeacherId::new);
        s.periods = (0..5).map(|d| Period::new(d, slot)).collect();
        s
    }

    #[test]
    fn flags_teacher_double_booking() {
        let schedule = schedule_of(vec![
            section("alg-1", "alg", Some("t1"), 0),
            section("bio-1", "bio", Some("t1"), 0),
        ]);

        let violations = check_teacher_overlaps(&schedule);
        assert!(!violations.is_empty());
        assert_eq!(violations[0].tag, ConstraintTag::NoTeacherConflict);
    }

    #[test]
    fn flags_student_double_booking() {
        let mut a = section("alg-1", "alg", None, 0);
        let mut b = section("bio-1", "bio", None, 0);
        a.admit(StudentId::new("s1"));
        b.admit(StudentId::new("s1"));
        let schedule = schedule_of(vec![a, b]);

        assert!(!check_student_overlaps(&schedule).is_empty());
    }

    #[test]
    fn flags_duplicate_course_enrollment() {
        let mut a = section("alg-1", "alg", None, 0);
        let mut b = section("alg-2", "alg", None, 1);
        a.admit(StudentId::new("s1"));
        b.admit(StudentId::new("s1"));
        let schedule = schedule_of(vec![a, b]);

        assert!(!check_single_enrollment_per_course(&schedule).is_empty());
    }

    #[test]
    fn flags_overfilled_section() {
        let mut s = section("alg-1", "alg", None, 0);
        s.capacity = 1;
        s.admit(StudentId::new("s1"));
        s.admit(StudentId::new("s2"));
        let schedule = schedule_of(vec![s]);

        assert!(!check_section_capacity(&schedule).is_empty());
    }

    #[test]
    fn clean_disjoint_sections_pass() {
        let schedule = schedule_of(vec![
            section("alg-1", "alg", Some("t1"), 0),
            section("bio-1", "bio", Some("t1"), 1),
        ]);

        assert!(check_teacher_overlaps(&schedule).is_empty());
        assert!(check_student_overlaps(&schedule).is_empty());
    }
}
