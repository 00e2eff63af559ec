//! Line-oriented constraint configuration grammar.
//!
//! ```text
//! # comment
//! HARD: NO_TEACHER_CONFLICT | teachers hold one section per period
//! SOFT: BALANCED_SECTIONS | even out section sizes | weight=0.5
//! CONFIG: PERIODS_PER_DAY = 8
//! GOAL: every senior gets Government
//! ```
//!
//! Hard and soft lines declare reporting tags; the engine's hard
//! constraints are fixed either way. `CONFIG` recognizes
//! `PERIODS_PER_DAY` and `DAYS_PER_WEEK`; unknown keys are preserved but
//! ignored. Unknown constraint names land in the custom bucket.

use crate::error::{Result, TimetableError};
use crate::model::{CalendarConfig, ConstraintRule, ConstraintTag};

/// Parsed constraint configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintsFile {
    pub rules: Vec<ConstraintRule>,
    pub goals: Vec<String>,
    /// Raw KEY = VALUE pairs in file order, unknown keys included
    pub config: Vec<(String, String)>,
}

impl ConstraintsFile {
    /// Apply recognized CONFIG keys onto a calendar.
    pub fn apply_calendar(&self, calendar: &mut CalendarConfig) {
        for (key, value) in &self.config {
            match key.as_str() {
                "PERIODS_PER_DAY" => {
                    if let Ok(v) = value.parse() {
                        calendar.periods_per_day = v;
                    }
                }
                "DAYS_PER_WEEK" => {
                    if let Ok(v) = value.parse() {
                        calendar.days_per_week = v;
                    }
                }
                _ => {}
            }
        }
    }
}

/// Parse the grammar. Blank lines and `#` comments are skipped; any other
/// line must carry a known directive prefix.
pub fn parse_constraints(text: &str) -> Result<ConstraintsFile> {
    let mut parsed = ConstraintsFile::default();

    for (n, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let lineno = n + 1;

        if let Some(rest) = line.strip_prefix("HARD:") {
            let (name, description) = split_name(rest);
            parsed
                .rules
                .push(ConstraintRule::hard(ConstraintTag::from_name(&name), description));
        } else if let Some(rest) = line.strip_prefix("SOFT:") {
            parsed.rules.push(parse_soft(rest, lineno)?);
        } else if let Some(rest) = line.strip_prefix("CONFIG:") {
            let (key, value) = rest.split_once('=').ok_or(TimetableError::ConstraintSyntax {
                line: lineno,
                message: "CONFIG needs the form KEY = VALUE".to_string(),
            })?;
            parsed
                .config
                .push((key.trim().to_string(), value.trim().to_string()));
        } else if let Some(rest) = line.strip_prefix("GOAL:") {
            parsed.goals.push(rest.trim().to_string());
        } else {
            return Err(TimetableError::ConstraintSyntax {
                line: lineno,
                message: format!("unrecognized directive: '{line}'"),
            }
            .into());
        }
    }

    Ok(parsed)
}

fn split_name(rest: &str) -> (String, String) {
    match rest.split_once('|') {
        Some((name, description)) => (name.trim().to_string(), description.trim().to_string()),
        None => (rest.trim().to_string(), String::new()),
    }
}

fn parse_soft(rest: &str, lineno: usize) -> Result<ConstraintRule> {
    let mut fields = rest.split('|');
    let name = fields.next().unwrap_or("").trim();
    let description = fields.next().unwrap_or("").trim();
    let weight_field = fields.next().map(str::trim).ok_or(TimetableError::ConstraintSyntax {
        line: lineno,
        message: "SOFT needs the form NAME | description | weight=<float>".to_string(),
    })?;

    let weight: f64 = weight_field
        .strip_prefix("weight=")
        .ok_or(TimetableError::ConstraintSyntax {
            line: lineno,
            message: format!("expected weight=<float>, got '{weight_field}'"),
        })?
        .parse()
        .map_err(|_| TimetableError::ConstraintSyntax {
            line: lineno,
            message: format!("'{weight_field}' is not a valid weight"),
        })?;

    Ok(ConstraintRule::soft(
        ConstraintTag::from_name(name),
        description,
        weight,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RuleKind;

    #[test]
    fn parses_a_full_file() {
        let text = "\
# school defaults

HARD: NO_TEACHER_CONFLICT | no double-booked teachers
SOFT: BALANCED_SECTIONS | keep sections even | weight=0.5
CONFIG: PERIODS_PER_DAY = 6
CONFIG: MASCOT = otter
GOAL: every senior gets Government
";
        let parsed = parse_constraints(text).unwrap();

        assert_eq!(parsed.rules.len(), 2);
        assert_eq!(parsed.rules[0].tag, ConstraintTag::NoTeacherConflict);
        assert_eq!(parsed.rules[0].kind, RuleKind::Hard);
        assert_eq!(
            parsed.rules[1].kind,
            RuleKind::Soft { weight: 0.5 }
        );
        assert_eq!(parsed.goals, vec!["every senior gets Government"]);
        assert_eq!(parsed.config.len(), 2);
    }

    #[test]
    fn config_overrides_apply_only_known_keys() {
        let parsed = parse_constraints(
            "CONFIG: PERIODS_PER_DAY = 4\nCONFIG: DAYS_PER_WEEK = 4\nCONFIG: MASCOT = otter\n",
        )
        .unwrap();

        let mut calendar = CalendarConfig::default();
        parsed.apply_calendar(&mut calendar);

        assert_eq!(calendar.periods_per_day, 4);
        assert_eq!(calendar.days_per_week, 4);
    }

    #[test]
    fn unknown_constraint_names_go_custom() {
        let parsed = parse_constraints("HARD: NO_FRIDAY_EXAMS | none\n").unwrap();
        assert!(parsed.rules[0].tag.is_custom());
    }

    #[test]
    fn soft_without_weight_is_an_error() {
        let err = parse_constraints("SOFT: BALANCED_SECTIONS | keep even\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn bad_weight_is_an_error() {
        assert!(parse_constraints("SOFT: X | y | weight=heavy\n").is_err());
    }

    #[test]
    fn stray_lines_are_errors() {
        let err = parse_constraints("\n# ok\nwhat is this\n").unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn empty_input_parses_to_defaults() {
        assert_eq!(parse_constraints("").unwrap(), ConstraintsFile::default());
    }
}
