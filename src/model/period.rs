use serde::{Deserialize, Serialize};
use std::fmt;

/// One concrete weekly meeting time: a `(day, slot)` pair with
/// `day < days_per_week` and `slot < periods_per_day`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Period {
    pub day: u8,
    pub slot: u8,
}

impl Period {
    pub fn new(day: u8, slot: u8) -> Self {
        Self { day, slot }
    }

    /// Canonical period key, `"day-slot"`
    pub fn key(&self) -> String {
        format!("{}-{}", self.day, self.slot)
    }

    pub fn day_name(&self) -> &'static str {
        match self.day {
            0 => "Monday",
            1 => "Tuesday",
            2 => "Wednesday",
            3 => "Thursday",
            4 => "Friday",
            5 => "Saturday",
            6 => "Sunday",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} period {}", self.day_name(), self.slot + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_day_dash_slot() {
        assert_eq!(Period::new(2, 5).key(), "2-5");
    }

    #[test]
    fn equality_is_exact() {
        assert_eq!(Period::new(1, 3), Period::new(1, 3));
        assert_ne!(Period::new(1, 3), Period::new(3, 1));
    }
}
