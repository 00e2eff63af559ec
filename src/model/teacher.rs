use super::{CourseId, Period, TeacherId};
use serde::{Deserialize, Serialize};

/// A teacher with subject qualifications and availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    #[serde(default)]
    pub name: String,
    /// Courses this teacher is qualified to teach
    #[serde(default)]
    pub subjects: Vec<CourseId>,
    /// Upper bound on sections this teacher may hold
    pub max_sections: u8,
    /// Periods the teacher cannot teach
    #[serde(default)]
    pub unavailable: Vec<Period>,
}

impl Teacher {
    pub fn qualified_for(&self, course_id: &CourseId) -> bool {
        self.subjects.contains(course_id)
    }

    pub fn free_at(&self, period: Period) -> bool {
        !self.unavailable.contains(&period)
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.id.as_str()
        } else {
            &self.name
        }
    }
}
