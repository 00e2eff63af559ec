use super::{CourseId, StudentId};
use serde::{Deserialize, Serialize};

/// A student with required courses and ranked elective preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    #[serde(default)]
    pub name: String,
    pub grade: u8,
    #[serde(default)]
    pub required_courses: Vec<CourseId>,
    /// Elective preferences in priority order (first = most preferred)
    #[serde(default)]
    pub elective_preferences: Vec<CourseId>,
}

impl Student {
    /// All courses the student asked for, required first.
    pub fn requested_courses(&self) -> impl Iterator<Item = &CourseId> {
        self.required_courses
            .iter()
            .chain(self.elective_preferences.iter())
    }

    pub fn requires(&self, course_id: &CourseId) -> bool {
        self.required_courses.contains(course_id)
    }

    pub fn requested(&self, course_id: &CourseId) -> bool {
        self.requires(course_id) || self.elective_preferences.contains(course_id)
    }

    /// 0-based preference rank of an elective, if listed.
    pub fn elective_rank(&self, course_id: &CourseId) -> Option<usize> {
        self.elective_preferences.iter().position(|c| c == course_id)
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.id.as_str()
        } else {
            &self.name
        }
    }
}
