use crate::audit::AuditReport;
use crate::model::{CourseId, Schedule, SchedulingInput};
use crate::report::TimetableGrid;
use std::collections::HashMap;

/// Full markdown report: provenance, summary table, audit outcome, the
/// master grid, per-course sections, and unplaced students.
pub fn render_markdown(
    schedule: &Schedule,
    input: &SchedulingInput,
    audit: &AuditReport,
) -> String {
    let mut lines = vec![
        "# Timetable Report".to_string(),
        String::new(),
        format!("Generated: {}", schedule.metadata.generated_at),
        format!("Algorithm: {}", schedule.metadata.algorithm),
        format!("Solve time: {}ms", schedule.metadata.solve_time_ms),
        String::new(),
    ];

    for warning in &schedule.metadata.warnings {
        lines.push(format!("> ⚠ {warning}"));
        lines.push(String::new());
    }

    lines.push("## Summary\n".to_string());
    lines.push("| Metric | Value |".to_string());
    lines.push("|--------|-------|".to_string());
    lines.push(format!("| Sections | {} |", audit.stats.total_sections));
    lines.push(format!("| Students | {} |", audit.stats.total_students));
    lines.push(format!("| Assignments | {} |", audit.stats.total_assignments));
    lines.push(format!(
        "| Unassigned required | {} |",
        audit.stats.unassigned_required
    ));
    lines.push(format!(
        "| Unassigned electives | {} |",
        audit.stats.unassigned_electives
    ));
    lines.push(format!("| Avg fill rate | {:.1}% |", audit.stats.avg_fill_rate));
    lines.push(format!("| Score | {:.1}/100 |", audit.score));
    lines.push(String::new());

    if audit.is_clean {
        lines.push("## Audit: ✅ clean\n".to_string());
    } else {
        lines.push("## Audit: ❌ violations\n".to_string());
        for violation in &audit.violations {
            lines.push(format!("- **{}**: {}", violation.tag, violation.message));
        }
        lines.push(String::new());
    }

    lines.push("## Soft Metrics\n".to_string());
    for metric in &audit.soft_metrics {
        lines.push(format!(
            "- **{}**: {:.1}% ({})",
            metric.name,
            metric.percent(),
            metric.details
        ));
    }
    lines.push(String::new());

    lines.push("## Week Grid\n".to_string());
    lines.push(TimetableGrid::build(schedule, input).to_markdown());
    lines.push(String::new());

    lines.push("## Course Sections\n".to_string());
    render_course_tables(schedule, input, &mut lines);

    if !schedule.unassigned.is_empty() {
        lines.push("## Unassigned Students\n".to_string());
        lines.push("| Student | Course | Reason |".to_string());
        lines.push("|---------|--------|--------|".to_string());
        for entry in &schedule.unassigned {
            lines.push(format!(
                "| {} | {} | {} |",
                entry.student_id, entry.course_id, entry.reason
            ));
        }
    }

    lines.join("\n")
}

fn render_course_tables(schedule: &Schedule, input: &SchedulingInput, lines: &mut Vec<String>) {
    let teacher_names: HashMap<&str, &str> = input
        .teachers
        .iter()
        .map(|t| (t.id.as_str(), t.display_name()))
        .collect();

    // Course input order keeps reports reproducible
    let mut remaining: Vec<&CourseId> = Vec::new();
    let mut by_course: HashMap<&CourseId, Vec<&crate::model::Section>> = HashMap::new();
    for section in &schedule.sections {
        if !by_course.contains_key(&section.course_id) {
            remaining.push(&section.course_id);
        }
        by_course.entry(&section.course_id).or_default().push(section);
    }
    let ordered: Vec<&CourseId> = input
        .courses
        .iter()
        .map(|c| &c.id)
        .filter(|id| by_course.contains_key(*id))
        .chain(remaining.iter().copied().filter(|id| {
            !input.courses.iter().any(|c| &&c.id == id)
        }))
        .collect();

    for course_id in ordered {
        let title = input
            .courses
            .iter()
            .find(|c| &c.id == course_id)
            .map(|c| c.display_name().to_string())
            .unwrap_or_else(|| course_id.to_string());

        lines.push(format!("### {title}\n"));
        lines.push("| Section | Slot | Room | Teacher | Enrolled |".to_string());
        lines.push("|---------|------|------|---------|----------|".to_string());

        for section in &by_course[course_id] {
            let slot = section
                .periods
                .first()
                .map(|p| format!("P{}", p.slot + 1))
                .unwrap_or_else(|| "—".to_string());
            let room = section
                .room_id
                .as_ref()
                .map(|r| r.to_string())
                .unwrap_or_else(|| "—".to_string());
            let teacher = section
                .teacher_id
                .as_ref()
                .and_then(|t| teacher_names.get(t.as_str()).copied())
                .unwrap_or("—");

            lines.push(format!(
                "| {} | {} | {} | {} | {}/{} |",
                section.id,
                slot,
                room,
                teacher,
                section.headcount(),
                section.capacity
            ));
        }
        lines.push(String::new());
    }
}
