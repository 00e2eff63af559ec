use super::{CourseId, Period, RoomId, SectionId, StudentId, TeacherId};
use serde::{Deserialize, Serialize};

/// One weekly instance of a course. Mutable while the engine runs: the
/// teacher is fixed in phase 1, periods in phase 2, the room in phase 3,
/// and the roster in phases 4 and 5.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub course_id: CourseId,
    pub teacher_id: Option<TeacherId>,
    pub room_id: Option<RoomId>,
    pub periods: Vec<Period>,
    pub enrolled_students: Vec<StudentId>,
    /// Nominal capacity, copied from the course
    pub capacity: u32,
}

impl Section {
    pub fn new(id: SectionId, course_id: CourseId, capacity: u32) -> Self {
        Self {
            id,
            course_id,
            teacher_id: None,
            room_id: None,
            periods: Vec::new(),
            enrolled_students: Vec::new(),
            capacity,
        }
    }

    pub fn headcount(&self) -> usize {
        self.enrolled_students.len()
    }

    pub fn at_capacity(&self) -> bool {
        self.enrolled_students.len() >= self.capacity as usize
    }

    pub fn has_student(&self, student_id: &StudentId) -> bool {
        self.enrolled_students.contains(student_id)
    }

    /// Append a student to the roster. Capacity is the caller's problem.
    pub fn admit(&mut self, student_id: StudentId) {
        if !self.has_student(&student_id) {
            self.enrolled_students.push(student_id);
        }
    }

    pub fn withdraw(&mut self, student_id: &StudentId) {
        self.enrolled_students.retain(|s| s != student_id);
    }

    pub fn meets_at(&self, period: Period) -> bool {
        self.periods.contains(&period)
    }
}
