use super::{ConstraintRule, Course, Room, Student, Teacher};
use serde::{Deserialize, Serialize};

/// Shape of the school week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default = "default_periods_per_day")]
    pub periods_per_day: u8,
    #[serde(default = "default_days_per_week")]
    pub days_per_week: u8,
}

fn default_periods_per_day() -> u8 {
    8
}

fn default_days_per_week() -> u8 {
    5
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            periods_per_day: 8,
            days_per_week: 5,
        }
    }
}

impl CalendarConfig {
    pub fn periods_in_week(&self) -> usize {
        self.periods_per_day as usize * self.days_per_week as usize
    }
}

/// Everything one solve consumes. Borrowed read-only by the engine.
#[derive(Debug, Clone)]
pub struct SchedulingInput {
    pub students: Vec<Student>,
    pub teachers: Vec<Teacher>,
    pub courses: Vec<Course>,
    pub rooms: Vec<Room>,
    /// Declared constraint tags; reporting only, the engine's hard
    /// constraints are fixed
    pub rules: Vec<ConstraintRule>,
    pub config: CalendarConfig,
}

impl SchedulingInput {
    pub fn new(
        students: Vec<Student>,
        teachers: Vec<Teacher>,
        courses: Vec<Course>,
        rooms: Vec<Room>,
    ) -> Self {
        Self {
            students,
            teachers,
            courses,
            rooms,
            rules: super::default_rules(),
            config: CalendarConfig::default(),
        }
    }
}
