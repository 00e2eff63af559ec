mod balance;
mod enrollment;
mod progress;
mod rooms;
mod sections;
mod timeslots;

pub use balance::*;
pub use enrollment::*;
pub use progress::*;
pub use rooms::*;
pub use sections::*;
pub use timeslots::*;

use crate::error::{Result, TimetableError};
use crate::model::{Schedule, ScheduleMetadata, SchedulingInput, Teacher, TeacherId};
use std::collections::HashMap;
use std::time::Instant;

/// Knobs for one solve.
pub struct SolveOptions<'a> {
    /// Upper bound on rebalancing passes
    pub max_optimization_iterations: u32,
    /// Try the ILP path first; false forces the greedy fallback
    pub use_ilp: bool,
    /// Inline progress observer
    pub on_progress: Option<Box<ProgressCallback<'a>>>,
}

impl Default for SolveOptions<'_> {
    fn default() -> Self {
        Self {
            max_optimization_iterations: 500,
            use_ilp: true,
            on_progress: None,
        }
    }
}

impl<'a> SolveOptions<'a> {
    pub fn greedy_only() -> Self {
        Self {
            use_ilp: false,
            ..Self::default()
        }
    }

    pub fn with_progress(mut self, callback: impl FnMut(ProgressEvent) + 'a) -> Self {
        self.on_progress = Some(Box::new(callback));
        self
    }
}

/// Run the five-phase pipeline with the production HiGHS adapter.
pub fn generate_schedule(input: &SchedulingInput, options: SolveOptions<'_>) -> Result<Schedule> {
    generate_schedule_with_solver(input, options, &HighsSolver)
}

/// Same pipeline, caller-supplied solver adapter. Lets tests script the
/// solver's verdict without a MIP backend in the loop.
pub fn generate_schedule_with_solver(
    input: &SchedulingInput,
    mut options: SolveOptions<'_>,
    solver: &dyn MipSolver,
) -> Result<Schedule> {
    let started = Instant::now();
    let mut progress = ProgressSink::new(options.on_progress.take());

    progress.emit(SolvePhase::Initializing, 0, "Materializing sections");
    let mut sections = materialize_sections(&input.courses, &input.teachers);
    check_factory_output(&sections, &input.teachers)?;
    progress.emit_with(
        SolvePhase::Initializing,
        10,
        "Sections materialized",
        Some(ProgressCounters {
            sections_created: Some(sections.len()),
            students_assigned: None,
        }),
    );

    progress.emit(SolvePhase::Initializing, 15, "Assigning time slots");
    assign_slots(&mut sections, &input.courses, &input.teachers, &input.config);

    progress.emit(SolvePhase::Initializing, 25, "Assigning rooms");
    assign_rooms(&mut sections, &input.rooms, &input.courses);

    progress.emit(SolvePhase::Assigning, 35, "Enrolling students");
    let strategy = if options.use_ilp {
        AssignmentStrategy::Ilp
    } else {
        AssignmentStrategy::Greedy
    };
    let outcome = enroll_students(
        sections,
        &input.students,
        &input.courses,
        strategy,
        solver,
        &mut progress,
    );

    let assigned = input
        .students
        .iter()
        .filter(|st| outcome.sections.iter().any(|s| s.has_student(&st.id)))
        .count();
    progress.emit_with(
        SolvePhase::Assigning,
        85,
        "Students enrolled",
        Some(ProgressCounters {
            students_assigned: Some(assigned),
            sections_created: None,
        }),
    );

    progress.emit(SolvePhase::Optimizing, 90, "Rebalancing section sizes");
    let sections = rebalance(outcome.sections, options.max_optimization_iterations);
    let score = score_schedule(&sections);

    progress.emit(SolvePhase::Complete, 100, "Schedule complete");

    Ok(Schedule {
        sections,
        unassigned: outcome.unassigned,
        metadata: ScheduleMetadata {
            generated_at: chrono::Utc::now().to_rfc3339(),
            algorithm: outcome.algorithm.as_str().to_string(),
            score,
            solve_time_ms: started.elapsed().as_millis() as u64,
            warnings: outcome.warnings,
        },
    })
}

/// The factory must never pair a section with an unqualified teacher;
/// downstream phases build on that.
fn check_factory_output(
    sections: &[crate::model::Section],
    teachers: &[Teacher],
) -> Result<()> {
    let by_id: HashMap<&TeacherId, &Teacher> = teachers.iter().map(|t| (&t.id, t)).collect();

    for section in sections {
        if let Some(teacher_id) = &section.teacher_id {
            let qualified = by_id
                .get(teacher_id)
                .map(|t| t.qualified_for(&section.course_id))
                .unwrap_or(false);
            if !qualified {
                return Err(TimetableError::Internal {
                    phase: "sections",
                    message: format!(
                        "section '{}' assigned to teacher '{}' who is not qualified for '{}'",
                        section.id, teacher_id, section.course_id
                    ),
                }
                .into());
            }
        }
    }

    Ok(())
}
