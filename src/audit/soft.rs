use crate::engine::preference_weight;
use crate::model::{CourseId, Schedule, SchedulingInput};
use itertools::{Itertools, MinMaxResult};
use std::collections::HashMap;

/// One soft-constraint measurement: points earned out of the attainable
/// maximum, plus a human-readable detail line.
#[derive(Debug, Clone)]
pub struct SoftMetric {
    pub name: &'static str,
    pub score: f64,
    pub max_score: f64,
    pub details: String,
}

impl SoftMetric {
    pub fn percent(&self) -> f64 {
        if self.max_score > 0.0 {
            self.score / self.max_score * 100.0
        } else {
            100.0
        }
    }
}

pub fn soft_metrics(schedule: &Schedule, input: &SchedulingInput) -> Vec<SoftMetric> {
    vec![
        required_fulfillment(schedule, input),
        elective_satisfaction(schedule, input),
        section_balance(schedule),
    ]
}

fn required_fulfillment(schedule: &Schedule, input: &SchedulingInput) -> SoftMetric {
    let total: usize = input.students.iter().map(|s| s.required_courses.len()).sum();
    let met: usize = input
        .students
        .iter()
        .map(|student| {
            student
                .required_courses
                .iter()
                .filter(|course_id| {
                    schedule
                        .sections_of(course_id)
                        .any(|s| s.has_student(&student.id))
                })
                .count()
        })
        .sum();

    SoftMetric {
        name: "required_courses",
        score: met as f64,
        max_score: total as f64,
        details: format!("{met}/{total} required placements made"),
    }
}

fn elective_satisfaction(schedule: &Schedule, input: &SchedulingInput) -> SoftMetric {
    let mut earned = 0.0;
    let mut attainable = 0.0;

    for student in &input.students {
        for course_id in &student.elective_preferences {
            // Required listings dominate; only pure electives counted here
            if student.requires(course_id) {
                continue;
            }
            let Some(weight) = preference_weight(student, course_id) else {
                continue;
            };
            attainable += weight;
            if schedule
                .sections_of(course_id)
                .any(|s| s.has_student(&student.id))
            {
                earned += weight;
            }
        }
    }

    SoftMetric {
        name: "elective_preferences",
        score: earned,
        max_score: attainable,
        details: format!("{earned:.0}/{attainable:.0} preference points earned"),
    }
}

fn section_balance(schedule: &Schedule) -> SoftMetric {
    let mut by_course: HashMap<&CourseId, Vec<usize>> = HashMap::new();
    for section in &schedule.sections {
        by_course
            .entry(&section.course_id)
            .or_default()
            .push(section.headcount());
    }

    let mut imbalance = 0.0;
    let mut measured = 0;
    for counts in by_course.values() {
        if counts.len() < 2 {
            continue;
        }
        if let MinMaxResult::MinMax(min, max) = counts.iter().minmax() {
            if *max > 0 {
                imbalance += (*max - *min) as f64 / *max as f64;
            }
            measured += 1;
        }
    }

    let avg = if measured > 0 {
        imbalance / measured as f64
    } else {
        0.0
    };

    SoftMetric {
        name: "section_balance",
        score: (1.0 - avg) * 100.0,
        max_score: 100.0,
        details: format!(
            "{:.1}% average imbalance over {} multi-section courses",
            avg * 100.0,
            measured
        ),
    }
}
