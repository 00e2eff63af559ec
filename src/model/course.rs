use super::CourseId;
use serde::{Deserialize, Serialize};

/// A course offering, materialized into `sections` weekly sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    #[serde(default)]
    pub name: String,
    /// Seats per section
    pub max_students: u32,
    /// Weekly meeting count
    #[serde(default = "default_periods_per_week")]
    pub periods_per_week: u8,
    /// Grades allowed to enroll (None = open to all)
    #[serde(default)]
    pub grade_restrictions: Option<Vec<u8>>,
    /// Room features the course needs, e.g. "lab"
    #[serde(default)]
    pub required_features: Vec<String>,
    /// Number of sections to materialize
    pub sections: u8,
}

fn default_periods_per_week() -> u8 {
    5
}

impl Course {
    pub fn admits_grade(&self, grade: u8) -> bool {
        match &self.grade_restrictions {
            Some(grades) => grades.contains(&grade),
            None => true,
        }
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.id.as_str()
        } else {
            &self.name
        }
    }
}
