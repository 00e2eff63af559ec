mod grid;
mod json;
mod markdown;
mod text;

pub use grid::*;
pub use json::*;
pub use markdown::*;
pub use text::*;

use crate::audit::AuditReport;
use crate::error::Result;
use crate::model::{Schedule, SchedulingInput, StudentId, TeacherId};
use itertools::Itertools;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Text,
}

impl OutputFormat {
    /// Parse a comma-separated format list; `all` selects every format.
    pub fn parse_list(raw: &str) -> Vec<OutputFormat> {
        if raw == "all" {
            return vec![OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text];
        }
        raw.split(',')
            .filter_map(|f| match f.trim().to_lowercase().as_str() {
                "json" => Some(OutputFormat::Json),
                "markdown" | "md" => Some(OutputFormat::Markdown),
                "text" | "txt" => Some(OutputFormat::Text),
                _ => None,
            })
            .collect()
    }
}

/// Write the selected report files into `out_dir`.
pub fn write_reports(
    schedule: &Schedule,
    input: &SchedulingInput,
    audit: &AuditReport,
    out_dir: &Path,
    formats: &[OutputFormat],
) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    for format in formats {
        match format {
            OutputFormat::Json => {
                fs::write(out_dir.join("schedule.json"), render_json(schedule)?)?;
            }
            OutputFormat::Markdown => {
                fs::write(
                    out_dir.join("schedule.md"),
                    render_markdown(schedule, input, audit),
                )?;
            }
            OutputFormat::Text => {
                fs::write(
                    out_dir.join("schedule.txt"),
                    render_text(schedule, input, audit),
                )?;
            }
        }
    }

    Ok(())
}

/// One student's week, or None for an unknown id.
pub fn student_view(
    schedule: &Schedule,
    input: &SchedulingInput,
    student_id: &StudentId,
) -> Option<String> {
    let student = input.students.iter().find(|s| &s.id == student_id)?;

    let mut lines = vec![
        format!("# Schedule for {} ({})", student.display_name(), student.id),
        format!("Grade: {}", student.grade),
        String::new(),
    ];

    let enrolled: Vec<_> = schedule
        .enrolled_sections(student_id)
        .sorted_by_key(|s| s.periods.first().map(|p| (p.slot, p.day)))
        .collect();

    if enrolled.is_empty() {
        lines.push("No courses enrolled.".to_string());
    } else {
        for section in enrolled {
            let course = input
                .courses
                .iter()
                .find(|c| c.id == section.course_id)
                .map(|c| c.display_name())
                .unwrap_or(section.course_id.as_str());
            let teacher = section
                .teacher_id
                .as_ref()
                .and_then(|tid| input.teachers.iter().find(|t| &t.id == tid))
                .map(|t| t.display_name())
                .unwrap_or("TBD");
            let room = section
                .room_id
                .as_ref()
                .map(|r| r.as_str())
                .unwrap_or("TBD");
            let slot = section
                .periods
                .first()
                .map(|p| format!("Period {}", p.slot + 1))
                .unwrap_or_else(|| "Unscheduled".to_string());

            lines.push(format!("- **{slot}**: {course} with {teacher}, room {room}"));
        }
    }

    let missing: Vec<_> = schedule
        .unassigned
        .iter()
        .filter(|u| &u.student_id == student_id)
        .collect();
    if !missing.is_empty() {
        lines.push(String::new());
        lines.push("## Not placed".to_string());
        for entry in missing {
            lines.push(format!("- {}: {}", entry.course_id, entry.reason));
        }
    }

    Some(lines.join("\n"))
}

/// One teacher's assignments, or None for an unknown id.
pub fn teacher_view(
    schedule: &Schedule,
    input: &SchedulingInput,
    teacher_id: &TeacherId,
) -> Option<String> {
    let teacher = input.teachers.iter().find(|t| &t.id == teacher_id)?;

    let sections: Vec<_> = schedule
        .sections
        .iter()
        .filter(|s| s.teacher_id.as_ref() == Some(teacher_id))
        .sorted_by_key(|s| s.periods.first().map(|p| (p.slot, p.day)))
        .collect();

    let mut lines = vec![
        format!("# Schedule for {} ({})", teacher.display_name(), teacher.id),
        String::new(),
    ];

    if sections.is_empty() {
        lines.push("No sections assigned.".to_string());
    } else {
        lines.push(format!("Teaching {} sections:", sections.len()));
        lines.push(String::new());
        for section in sections {
            let course = input
                .courses
                .iter()
                .find(|c| c.id == section.course_id)
                .map(|c| c.display_name())
                .unwrap_or(section.course_id.as_str());
            let slot = section
                .periods
                .first()
                .map(|p| format!("Period {}", p.slot + 1))
                .unwrap_or_else(|| "Unscheduled".to_string());
            let room = section
                .room_id
                .as_ref()
                .map(|r| r.as_str())
                .unwrap_or("TBD");

            lines.push(format!(
                "- **{}** ({}): {}, room {}, {} students",
                course,
                section.id,
                slot,
                room,
                section.headcount()
            ));
        }
    }

    Some(lines.join("\n"))
}
