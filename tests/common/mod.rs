//! Shared builders for integration tests.
#![allow(dead_code)]

use timetabler::model::{
    CalendarConfig, Course, CourseId, Period, Room, RoomId, SchedulingInput, Student, StudentId,
    Teacher, TeacherId,
};

pub fn student(id: &str, grade: u8, required: &[&str], electives: &[&str]) -> Student {
    Student {
        id: StudentId::new(id),
        name: String::new(),
        grade,
        required_courses: required.iter().map(|c| CourseId::new(*c)).collect(),
        elective_preferences: electives.iter().map(|c| CourseId::new(*c)).collect(),
    }
}

pub fn teacher(id: &str, subjects: &[&str], max_sections: u8) -> Teacher {
    Teacher {
        id: TeacherId::new(id),
        name: String::new(),
        subjects: subjects.iter().map(|c| CourseId::new(*c)).collect(),
        max_sections,
        unavailable: vec![],
    }
}

pub fn course(id: &str, max_students: u32, sections: u8, grades: Option<Vec<u8>>) -> Course {
    Course {
        id: CourseId::new(id),
        name: String::new(),
        max_students,
        periods_per_week: 5,
        grade_restrictions: grades,
        required_features: vec![],
        sections,
    }
}

pub fn room(id: &str, capacity: u32, features: &[&str]) -> Room {
    Room {
        id: RoomId::new(id),
        name: String::new(),
        capacity,
        features: features.iter().map(|f| f.to_string()).collect(),
        unavailable: vec![],
    }
}

pub fn input(
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    courses: Vec<Course>,
    rooms: Vec<Room>,
    periods_per_day: u8,
    days_per_week: u8,
) -> SchedulingInput {
    let mut input = SchedulingInput::new(students, teachers, courses, rooms);
    input.config = CalendarConfig {
        periods_per_day,
        days_per_week,
    };
    input
}

pub fn blocked_every_day(days: u8, slot: u8) -> Vec<Period> {
    (0..days).map(|d| Period::new(d, slot)).collect()
}
