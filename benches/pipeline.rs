use criterion::{criterion_group, criterion_main, Criterion};
use timetabler::engine::{generate_schedule, SolveOptions};
use timetabler::model::{
    CalendarConfig, Course, CourseId, Room, RoomId, SchedulingInput, Student, StudentId, Teacher,
    TeacherId,
};

/// A mid-sized school: 120 students over 8 courses, greedy path so the
/// numbers reflect the pipeline rather than the MIP backend.
fn school_input() -> SchedulingInput {
    let course_ids = ["alg", "geo", "eng", "bio", "hist", "art", "music", "pe"];

    let courses: Vec<Course> = course_ids
        .iter()
        .map(|id| Course {
            id: CourseId::new(*id),
            name: String::new(),
            max_students: 25,
            periods_per_week: 5,
            grade_restrictions: None,
            required_features: vec![],
            sections: 3,
        })
        .collect();

    let teachers: Vec<Teacher> = course_ids
        .iter()
        .enumerate()
        .map(|(i, id)| Teacher {
            id: TeacherId::new(format!("t{i}")),
            name: String::new(),
            subjects: vec![CourseId::new(*id)],
            max_sections: 3,
            unavailable: vec![],
        })
        .collect();

    let rooms: Vec<Room> = (0..12)
        .map(|i| Room {
            id: RoomId::new(format!("r{i}")),
            name: String::new(),
            capacity: 30,
            features: vec![],
            unavailable: vec![],
        })
        .collect();

    let students: Vec<Student> = (0..120)
        .map(|i| Student {
            id: StudentId::new(format!("s{i:03}")),
            name: String::new(),
            grade: 9 + (i % 4) as u8,
            required_courses: vec![
                CourseId::new("alg"),
                CourseId::new("eng"),
                CourseId::new("bio"),
            ],
            elective_preferences: vec![
                CourseId::new(course_ids[5 + i % 3]),
                CourseId::new("hist"),
            ],
        })
        .collect();

    let mut input = SchedulingInput::new(students, teachers, courses, rooms);
    input.config = CalendarConfig {
        periods_per_day: 8,
        days_per_week: 5,
    };
    input
}

fn bench_pipeline(c: &mut Criterion) {
    let input = school_input();

    c.bench_function("generate_schedule_greedy_120_students", |b| {
        b.iter(|| generate_schedule(&input, SolveOptions::greedy_only()).unwrap())
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
