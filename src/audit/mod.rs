mod hard;
mod soft;

pub use hard::*;
pub use soft::*;

use crate::engine::score_schedule;
use crate::model::{ConstraintTag, Schedule, SchedulingInput};

/// One certified constraint violation.
#[derive(Debug, Clone)]
pub struct Violation {
    pub tag: ConstraintTag,
    pub message: String,
}

impl Violation {
    pub(crate) fn new(tag: ConstraintTag, message: impl Into<String>) -> Self {
        Self {
            tag,
            message: message.into(),
        }
    }
}

/// Headline numbers for reports.
#[derive(Debug, Clone, Default)]
pub struct AuditStats {
    pub total_sections: usize,
    pub total_students: usize,
    pub total_assignments: usize,
    pub unassigned_required: usize,
    pub unassigned_electives: usize,
    pub avg_fill_rate: f64,
}

/// Full audit outcome: hard violations, soft metrics, statistics, and the
/// recomputed quality score.
#[derive(Debug, Clone)]
pub struct AuditReport {
    pub is_clean: bool,
    pub violations: Vec<Violation>,
    pub soft_metrics: Vec<SoftMetric>,
    pub stats: AuditStats,
    pub score: f64,
}

/// Certify a schedule against its input: every hard invariant the engine
/// promises, plus the soft metrics worth reporting.
pub fn audit_schedule(schedule: &Schedule, input: &SchedulingInput) -> AuditReport {
    let mut violations = Vec::new();
    violations.extend(check_teacher_qualifications(schedule, input));
    violations.extend(check_teacher_overlaps(schedule));
    violations.extend(check_teacher_availability(schedule, input));
    violations.extend(check_teacher_load(schedule, input));
    violations.extend(check_room_overlaps(schedule));
    violations.extend(check_room_availability(schedule, input));
    violations.extend(check_room_suitability(schedule, input));
    violations.extend(check_student_overlaps(schedule));
    violations.extend(check_single_enrollment_per_course(schedule));
    violations.extend(check_grade_eligibility(schedule, input));
    violations.extend(check_section_capacity(schedule));
    violations.extend(check_unassigned_references(schedule, input));

    let soft_metrics = soft_metrics(schedule, input);
    let stats = collect_stats(schedule, input);
    let score = score_schedule(&schedule.sections);

    AuditReport {
        is_clean: violations.is_empty(),
        violations,
        soft_metrics,
        stats,
        score,
    }
}

fn collect_stats(schedule: &Schedule, input: &SchedulingInput) -> AuditStats {
    let total_sections = schedule.sections.len();
    let total_assignments = schedule.seat_count();

    let unassigned_required = schedule
        .unassigned
        .iter()
        .filter(|u| {
            input
                .students
                .iter()
                .find(|s| s.id == u.student_id)
                .map(|s| s.requires(&u.course_id))
                .unwrap_or(false)
        })
        .count();

    let avg_fill_rate = if total_sections > 0 {
        schedule
            .sections
            .iter()
            .map(|s| s.headcount() as f64 / s.capacity.max(1) as f64)
            .sum::<f64>()
            / total_sections as f64
            * 100.0
    } else {
        0.0
    };

    AuditStats {
        total_sections,
        total_students: input.students.len(),
        total_assignments,
        unassigned_required,
        unassigned_electives: schedule.unassigned.len() - unassigned_required,
        avg_fill_rate,
    }
}
