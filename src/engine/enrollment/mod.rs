mod greedy;
mod model;
mod solver;

pub use greedy::*;
pub use model::*;
pub use solver::*;

use crate::engine::progress::{ProgressSink, SolvePhase};
use crate::model::{Course, CourseId, Section, Student, Unassigned};
use std::collections::HashMap;

pub const ILP_UNPLACED_REASON: &str = "ILP could not find feasible assignment";

/// Closed choice of assignment path. Exactly two members, so a tagged
/// variant rather than a trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentStrategy {
    Ilp,
    Greedy,
}

/// Which path actually produced the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Ilp,
    Greedy,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Ilp => "ilp",
            Algorithm::Greedy => "greedy",
        }
    }
}

pub struct EnrollmentOutcome {
    pub sections: Vec<Section>,
    pub unassigned: Vec<Unassigned>,
    pub algorithm: Algorithm,
    pub warnings: Vec<String>,
}

/// Phase 4: fill section rosters.
///
/// The ILP path builds the assignment model and hands it to the solver
/// adapter; any status other than Optimal/Feasible drops to the greedy
/// fallback with a warning recorded for the schedule metadata.
pub(crate) fn enroll_students(
    mut sections: Vec<Section>,
    students: &[Student],
    courses: &[Course],
    strategy: AssignmentStrategy,
    solver: &dyn MipSolver,
    progress: &mut ProgressSink<'_>,
) -> EnrollmentOutcome {
    match strategy {
        AssignmentStrategy::Greedy => {
            progress.emit(SolvePhase::Assigning, 45, "Enrolling students (greedy)");
            let unassigned = greedy_enroll(&mut sections, students, courses);
            EnrollmentOutcome {
                sections,
                unassigned,
                algorithm: Algorithm::Greedy,
                warnings: Vec::new(),
            }
        }
        AssignmentStrategy::Ilp => {
            progress.emit(SolvePhase::Assigning, 40, "Building assignment model");
            let model = build_assignment_model(students, &sections, courses);

            progress.emit(SolvePhase::Assigning, 55, "Solving assignment model");
            let outcome = solver.solve(&model);

            if outcome.status.is_usable() {
                progress.emit(SolvePhase::Assigning, 80, "Extracting solver assignments");
                let unassigned =
                    apply_solution(&mut sections, &model, &outcome.values, students, courses);
                EnrollmentOutcome {
                    sections,
                    unassigned,
                    algorithm: Algorithm::Ilp,
                    warnings: Vec::new(),
                }
            } else {
                let warning = format!(
                    "MIP solver returned {}; enrollment fell back to greedy",
                    outcome.status
                );
                log::warn!("{warning}");
                progress.emit(SolvePhase::Assigning, 60, "Solver unusable, greedy fallback");
                let unassigned = greedy_enroll(&mut sections, students, courses);
                EnrollmentOutcome {
                    sections,
                    unassigned,
                    algorithm: Algorithm::Greedy,
                    warnings: vec![warning],
                }
            }
        }
    }
}

/// Turn solver values into enrollments, then report every eligible
/// required course the solution left out.
fn apply_solution(
    sections: &mut [Section],
    model: &AssignmentModel,
    values: &[f64],
    students: &[Student],
    courses: &[Course],
) -> Vec<Unassigned> {
    for (var, &value) in model.vars.iter().zip(values) {
        if value > 0.5 {
            sections[var.section].admit(students[var.student].id.clone());
        }
    }

    let course_map: HashMap<&CourseId, &Course> = courses.iter().map(|c| (&c.id, c)).collect();
    let mut unassigned = Vec::new();

    for student in students {
        for course_id in &student.required_courses {
            match course_map.get(course_id) {
                Some(course) if course.admits_grade(student.grade) => {}
                // Grade-excluded or dangling references get no report here
                _ => continue,
            }
            let enrolled = sections
                .iter()
                .any(|s| &s.course_id == course_id && s.has_student(&student.id));
            if !enrolled {
                unassigned.push(Unassigned {
                    student_id: student.id.clone(),
                    course_id: course_id.clone(),
                    reason: ILP_UNPLACED_REASON.to_string(),
                });
            }
        }
    }

    unassigned
}
