use super::{Period, RoomId};
use serde::{Deserialize, Serialize};

/// A physical room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    #[serde(default)]
    pub name: String,
    pub capacity: u32,
    /// Features the room provides, e.g. "lab", "gym"
    #[serde(default)]
    pub features: Vec<String>,
    /// Periods the room cannot host a section
    #[serde(default)]
    pub unavailable: Vec<Period>,
}

impl Room {
    /// Feature-superset check against a course's requirements.
    pub fn covers(&self, required: &[String]) -> bool {
        required.iter().all(|f| self.features.contains(f))
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
