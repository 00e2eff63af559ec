use serde::{Deserialize, Serialize};
use std::fmt;

/// Named constraint tags recognized by the configuration grammar.
///
/// Tags label violations and soft-metric reports; the engine's hard
/// constraints themselves are fixed. Names outside the known set land in
/// the `Custom` bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintTag {
    NoTeacherConflict,
    NoStudentConflict,
    NoRoomConflict,
    RoomCapacity,
    TeacherQualified,
    TeacherAvailability,
    RoomFeatures,
    GradeRestriction,
    TeacherMaxSections,
    BalancedSections,
    StudentElectivePreference,
    MinimizeGaps,
    TeacherPreferences,
    LunchAvailability,
    Custom(String),
}

impl ConstraintTag {
    /// Map a SCREAMING_SNAKE directive name to a tag.
    pub fn from_name(name: &str) -> Self {
        match name {
            "NO_TEACHER_CONFLICT" => Self::NoTeacherConflict,
            "NO_STUDENT_CONFLICT" => Self::NoStudentConflict,
            "NO_ROOM_CONFLICT" => Self::NoRoomConflict,
            "ROOM_CAPACITY" => Self::RoomCapacity,
            "TEACHER_QUALIFIED" => Self::TeacherQualified,
            "TEACHER_AVAILABILITY" => Self::TeacherAvailability,
            "ROOM_FEATURES" => Self::RoomFeatures,
            "GRADE_RESTRICTION" => Self::GradeRestriction,
            "TEACHER_MAX_SECTIONS" => Self::TeacherMaxSections,
            "BALANCED_SECTIONS" => Self::BalancedSections,
            "STUDENT_ELECTIVE_PREFERENCE" => Self::StudentElectivePreference,
            "MINIMIZE_GAPS" => Self::MinimizeGaps,
            "TEACHER_PREFERENCES" => Self::TeacherPreferences,
            "LUNCH_AVAILABILITY" => Self::LunchAvailability,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::NoTeacherConflict => "NO_TEACHER_CONFLICT",
            Self::NoStudentConflict => "NO_STUDENT_CONFLICT",
            Self::NoRoomConflict => "NO_ROOM_CONFLICT",
            Self::RoomCapacity => "ROOM_CAPACITY",
            Self::TeacherQualified => "TEACHER_QUALIFIED",
            Self::TeacherAvailability => "TEACHER_AVAILABILITY",
            Self::RoomFeatures => "ROOM_FEATURES",
            Self::GradeRestriction => "GRADE_RESTRICTION",
            Self::TeacherMaxSections => "TEACHER_MAX_SECTIONS",
            Self::BalancedSections => "BALANCED_SECTIONS",
            Self::StudentElectivePreference => "STUDENT_ELECTIVE_PREFERENCE",
            Self::MinimizeGaps => "MINIMIZE_GAPS",
            Self::TeacherPreferences => "TEACHER_PREFERENCES",
            Self::LunchAvailability => "LUNCH_AVAILABILITY",
            Self::Custom(name) => name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for ConstraintTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hard rules must hold in the output; soft rules carry an objective weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RuleKind {
    Hard,
    Soft { weight: f64 },
}

/// A declared constraint, as read from the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintRule {
    pub tag: ConstraintTag,
    pub kind: RuleKind,
    pub description: String,
}

impl ConstraintRule {
    pub fn hard(tag: ConstraintTag, description: impl Into<String>) -> Self {
        Self {
            tag,
            kind: RuleKind::Hard,
            description: description.into(),
        }
    }

    pub fn soft(tag: ConstraintTag, description: impl Into<String>, weight: f64) -> Self {
        Self {
            tag,
            kind: RuleKind::Soft { weight },
            description: description.into(),
        }
    }
}

/// The rule set assumed when no constraint file is supplied.
pub fn default_rules() -> Vec<ConstraintRule> {
    vec![
        ConstraintRule::hard(ConstraintTag::NoTeacherConflict, "teachers hold one section per period"),
        ConstraintRule::hard(ConstraintTag::NoStudentConflict, "students attend one section per period"),
        ConstraintRule::hard(ConstraintTag::NoRoomConflict, "rooms host one section per period"),
        ConstraintRule::hard(ConstraintTag::RoomCapacity, "room capacity covers section capacity"),
        ConstraintRule::hard(ConstraintTag::TeacherQualified, "teachers only teach their subjects"),
        ConstraintRule::hard(ConstraintTag::TeacherAvailability, "sections avoid teacher unavailability"),
        ConstraintRule::hard(ConstraintTag::RoomFeatures, "rooms provide required features"),
        ConstraintRule::hard(ConstraintTag::GradeRestriction, "enrollment honors grade restrictions"),
        ConstraintRule::hard(ConstraintTag::TeacherMaxSections, "teacher load stays within max_sections"),
        ConstraintRule::soft(ConstraintTag::BalancedSections, "even out section sizes", 0.5),
        ConstraintRule::soft(ConstraintTag::StudentElectivePreference, "honor elective rankings", 1.0),
    ]
}
