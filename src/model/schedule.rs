use super::{CourseId, Section, SectionId, StudentId};
use serde::{Deserialize, Serialize};

/// A (student, course) pair the engine could not place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unassigned {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub reason: String,
}

/// Provenance block attached to a finished schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    pub generated_at: String,
    /// Which assignment path produced the roster: "ilp" or "greedy"
    pub algorithm: String,
    pub score: f64,
    pub solve_time_ms: u64,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// The finished timetable. Immutable once the engine returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub sections: Vec<Section>,
    pub unassigned: Vec<Unassigned>,
    pub metadata: ScheduleMetadata,
}

impl Schedule {
    pub fn sections_of<'a>(&'a self, course_id: &'a CourseId) -> impl Iterator<Item = &'a Section> + 'a {
        self.sections.iter().filter(move |s| &s.course_id == course_id)
    }

    pub fn enrolled_sections<'a>(&'a self, student_id: &'a StudentId) -> impl Iterator<Item = &'a Section> + 'a {
        self.sections
            .iter()
            .filter(move |s| s.has_student(student_id))
    }

    pub fn section(&self, section_id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == section_id)
    }

    /// Total student-section assignments
    pub fn seat_count(&self) -> usize {
        self.sections.iter().map(|s| s.headcount()).sum()
    }
}
