use crate::audit::AuditReport;
use crate::model::{Schedule, SchedulingInput};
use colored::Colorize;
use std::collections::HashMap;

/// Terminal-friendly report with fill indicators.
pub fn render_text(schedule: &Schedule, input: &SchedulingInput, audit: &AuditReport) -> String {
    let mut lines = Vec::new();

    lines.push("═".repeat(60));
    lines.push("               TIMETABLE REPORT".to_string());
    lines.push("═".repeat(60));
    lines.push(String::new());
    lines.push(format!("Generated:  {}", schedule.metadata.generated_at));
    lines.push(format!("Algorithm:  {}", schedule.metadata.algorithm));
    lines.push(format!("Solve time: {}ms", schedule.metadata.solve_time_ms));
    for warning in &schedule.metadata.warnings {
        lines.push(format!("{} {}", "Warning:".yellow(), warning));
    }
    lines.push(String::new());

    lines.push("─".repeat(40));
    lines.push(format!("  Sections:     {}", audit.stats.total_sections));
    lines.push(format!("  Students:     {}", audit.stats.total_students));
    lines.push(format!("  Assignments:  {}", audit.stats.total_assignments));
    lines.push(format!(
        "  Unassigned:   {} required, {} electives",
        audit.stats.unassigned_required, audit.stats.unassigned_electives
    ));
    lines.push(format!("  Fill rate:    {:.1}%", audit.stats.avg_fill_rate));
    lines.push(format!("  Score:        {:.1}/100", audit.score));
    lines.push("─".repeat(40));

    if audit.is_clean {
        lines.push("AUDIT: CLEAN".green().to_string());
    } else {
        lines.push("AUDIT: VIOLATIONS".red().to_string());
        for violation in &audit.violations {
            lines.push(format!("  ! {}: {}", violation.tag, violation.message));
        }
    }
    lines.push(String::new());

    let course_names: HashMap<&str, &str> = input
        .courses
        .iter()
        .map(|c| (c.id.as_str(), c.display_name()))
        .collect();
    let teacher_names: HashMap<&str, &str> = input
        .teachers
        .iter()
        .map(|t| (t.id.as_str(), t.display_name()))
        .collect();

    lines.push("SECTIONS".to_string());
    lines.push("─".repeat(40));
    for section in &schedule.sections {
        let course = course_names
            .get(section.course_id.as_str())
            .copied()
            .unwrap_or(section.course_id.as_str());
        let slot = section
            .periods
            .first()
            .map(|p| format!("P{}", p.slot + 1))
            .unwrap_or_else(|| "—".to_string());
        let teacher = section
            .teacher_id
            .as_ref()
            .and_then(|t| teacher_names.get(t.as_str()).copied())
            .unwrap_or("TBD");
        let room = section
            .room_id
            .as_ref()
            .map(|r| r.as_str())
            .unwrap_or("TBD");

        let fill = section.headcount() as f64 / section.capacity.max(1) as f64 * 100.0;
        let dot = if fill >= 90.0 {
            "●".red()
        } else if fill >= 70.0 {
            "●".yellow()
        } else {
            "●".green()
        };

        lines.push(format!(
            "  {} {} | {} | {} | {} | {}/{} {}",
            dot,
            section.id,
            course,
            slot,
            teacher,
            section.headcount(),
            section.capacity,
            format!("room {room}").dimmed()
        ));
    }

    lines.push(String::new());
    lines.push("═".repeat(60));
    lines.join("\n")
}

/// Short stdout summary after a solve.
pub fn print_summary(schedule: &Schedule, audit: &AuditReport) {
    println!();
    if audit.is_clean {
        println!("{}", "✓ Schedule generated, audit clean".green().bold());
    } else {
        println!(
            "{}",
            format!("✗ Audit found {} violations", audit.violations.len())
                .red()
                .bold()
        );
    }
    println!();
    println!("  Algorithm:   {}", schedule.metadata.algorithm);
    println!("  Sections:    {}", audit.stats.total_sections);
    println!("  Assignments: {}", audit.stats.total_assignments);
    println!(
        "  Unassigned:  {}",
        audit.stats.unassigned_required + audit.stats.unassigned_electives
    );
    println!("  Score:       {:.1}/100", audit.score);
    println!("  Time:        {}ms", schedule.metadata.solve_time_ms);
    println!();
}
