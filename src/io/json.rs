use crate::error::{Result, TimetableError};
use crate::io::parse_constraints;
use crate::model::{
    CalendarConfig, Course, Room, SchedulingInput, Student, Teacher, default_rules,
};
use std::fs;
use std::path::Path;

/// Load a complete input set from one directory: the four JSON documents
/// plus an optional `constraints.txt` carrying rule declarations and
/// calendar overrides.
pub fn load_input_from_dir(dir: &Path) -> Result<SchedulingInput> {
    let students: Vec<Student> = load_json(&dir.join("students.json"))?;
    let teachers: Vec<Teacher> = load_json(&dir.join("teachers.json"))?;
    let courses: Vec<Course> = load_json(&dir.join("courses.json"))?;
    let rooms: Vec<Room> = load_json(&dir.join("rooms.json"))?;

    let mut config = CalendarConfig::default();
    let constraints_path = dir.join("constraints.txt");
    let rules = if constraints_path.exists() {
        let text = fs::read_to_string(&constraints_path).map_err(|e| TimetableError::FileRead {
            path: constraints_path.display().to_string(),
            source: e,
        })?;
        let parsed = parse_constraints(&text)?;
        parsed.apply_calendar(&mut config);
        parsed.rules
    } else {
        default_rules()
    };

    Ok(SchedulingInput {
        students,
        teachers,
        courses,
        rooms,
        rules,
        config,
    })
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let shown = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| TimetableError::FileRead {
        path: shown.clone(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| {
        TimetableError::Parse {
            file: shown,
            message: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_minimal_inputs(dir: &Path) {
        fs::write(
            dir.join("students.json"),
            r#"[{"id": "s1", "grade": 10, "required_courses": ["alg"]}]"#,
        )
        .unwrap();
        fs::write(
            dir.join("teachers.json"),
            r#"[{"id": "t1", "subjects": ["alg"], "max_sections": 3}]"#,
        )
        .unwrap();
        fs::write(
            dir.join("courses.json"),
            r#"[{"id": "alg", "max_students": 30, "sections": 1}]"#,
        )
        .unwrap();
        fs::write(dir.join("rooms.json"), r#"[{"id": "r1", "capacity": 30}]"#).unwrap();
    }

    #[test]
    fn loads_minimal_documents_with_defaults() {
        let dir = std::env::temp_dir().join("timetabler-io-minimal");
        fs::create_dir_all(&dir).unwrap();
        write_minimal_inputs(&dir);

        let input = load_input_from_dir(&dir).unwrap();

        assert_eq!(input.students.len(), 1);
        assert!(input.students[0].elective_preferences.is_empty());
        assert!(input.teachers[0].unavailable.is_empty());
        assert_eq!(input.courses[0].periods_per_week, 5);
        assert_eq!(input.config, CalendarConfig::default());
        assert!(!input.rules.is_empty());
    }

    #[test]
    fn constraints_file_overrides_calendar() {
        let dir = std::env::temp_dir().join("timetabler-io-constraints");
        fs::create_dir_all(&dir).unwrap();
        write_minimal_inputs(&dir);
        fs::write(
            dir.join("constraints.txt"),
            "CONFIG: PERIODS_PER_DAY = 4\nHARD: ROOM_CAPACITY | fits\n",
        )
        .unwrap();

        let input = load_input_from_dir(&dir).unwrap();

        assert_eq!(input.config.periods_per_day, 4);
        assert_eq!(input.rules.len(), 1);
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let dir = std::env::temp_dir().join("timetabler-io-missing");
        fs::create_dir_all(&dir).unwrap();
        let _ = fs::remove_file(dir.join("students.json"));

        let err = load_input_from_dir(&dir).unwrap_err();
        assert!(err.to_string().contains("students.json"));
    }

    #[test]
    fn malformed_json_is_an_input_error() {
        let dir = std::env::temp_dir().join("timetabler-io-malformed");
        fs::create_dir_all(&dir).unwrap();
        write_minimal_inputs(&dir);
        fs::write(dir.join("rooms.json"), "{not json").unwrap();

        let err = load_input_from_dir(&dir).unwrap_err();
        assert!(err.to_string().contains("rooms.json"));
    }
}
