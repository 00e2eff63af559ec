use crate::model::{Course, CourseId, Period, Section, Student};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Objective weight of a required-course assignment. Three orders of
/// magnitude above any elective, yet still soft: forcing equality made the
/// whole model infeasible on any single conflict.
pub const REQUIRED_WEIGHT: f64 = 1000.0;

/// Electives ranked 10th or later carry no weight and get no variable.
pub const ELECTIVE_RANK_CUTOFF: usize = 10;

/// Objective weight of enrolling `student` in `course_id`, or None when
/// the pair should not produce a decision variable.
pub fn preference_weight(student: &Student, course_id: &CourseId) -> Option<f64> {
    if student.requires(course_id) {
        return Some(REQUIRED_WEIGHT);
    }
    match student.elective_rank(course_id) {
        Some(rank) if rank < ELECTIVE_RANK_CUTOFF => Some((ELECTIVE_RANK_CUTOFF - rank) as f64),
        _ => None,
    }
}

/// One binary decision variable: enroll `student` (index) in `section`
/// (index), worth `weight` in the objective.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateVar {
    pub student: usize,
    pub section: usize,
    pub weight: f64,
}

/// One constraint row: the sum of the listed variables is at most `upper`.
/// Every coefficient in this model is 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintRow {
    pub vars: Vec<usize>,
    pub upper: f64,
}

/// Solver-independent assignment model: maximize the weighted variable sum
/// subject to the rows. Adapters translate this into a concrete backend.
#[derive(Debug, Clone, Default)]
pub struct AssignmentModel {
    pub vars: Vec<CandidateVar>,
    pub rows: Vec<ConstraintRow>,
}

impl AssignmentModel {
    pub fn objective_of(&self, values: &[f64]) -> f64 {
        self.vars
            .iter()
            .zip(values)
            .map(|(var, value)| var.weight * value)
            .sum()
    }
}

/// Build the binary assignment model.
///
/// Variables exist only for grade-eligible (student, section) pairs whose
/// course the student requested with nonzero weight. Constraint families:
/// at most one section per requested course, section capacity, and at most
/// one section per student per contested period.
pub fn build_assignment_model(
    students: &[Student],
    sections: &[Section],
    courses: &[Course],
) -> AssignmentModel {
    let course_map: HashMap<&CourseId, &Course> = courses.iter().map(|c| (&c.id, c)).collect();

    let mut sections_by_course: HashMap<&CourseId, Vec<usize>> = HashMap::new();
    for (k, section) in sections.iter().enumerate() {
        sections_by_course
            .entry(&section.course_id)
            .or_default()
            .push(k);
    }

    let mut model = AssignmentModel::default();
    // (student, section) -> variable index
    let mut index: HashMap<(usize, usize), usize> = HashMap::new();

    for (i, student) in students.iter().enumerate() {
        for (k, section) in sections.iter().enumerate() {
            // A missing course record cannot veto on grade; ingestion
            // validation flags the dangling reference.
            if let Some(course) = course_map.get(&section.course_id) {
                if !course.admits_grade(student.grade) {
                    continue;
                }
            }
            if let Some(weight) = preference_weight(student, &section.course_id) {
                index.insert((i, k), model.vars.len());
                model.vars.push(CandidateVar {
                    student: i,
                    section: k,
                    weight,
                });
            }
        }
    }

    // One section per (student, course), required and elective alike
    for (i, student) in students.iter().enumerate() {
        let mut seen: HashSet<&CourseId> = HashSet::new();
        for course_id in student.requested_courses() {
            if !seen.insert(course_id) {
                continue;
            }
            let vars: Vec<usize> = sections_by_course
                .get(course_id)
                .into_iter()
                .flatten()
                .filter_map(|&k| index.get(&(i, k)).copied())
                .collect();
            if vars.len() > 1 {
                model.rows.push(ConstraintRow { vars, upper: 1.0 });
            }
        }
    }

    // Section capacity
    for (k, section) in sections.iter().enumerate() {
        let vars: Vec<usize> = (0..students.len())
            .filter_map(|i| index.get(&(i, k)).copied())
            .collect();
        if !vars.is_empty() {
            model.rows.push(ConstraintRow {
                vars,
                upper: section.capacity as f64,
            });
        }
    }

    // One section per (student, period) wherever candidates collide
    for i in 0..students.len() {
        let mut by_period: BTreeMap<Period, Vec<usize>> = BTreeMap::new();
        for (k, section) in sections.iter().enumerate() {
            if let Some(&var) = index.get(&(i, k)) {
                for period in &section.periods {
                    by_period.entry(*period).or_default().push(var);
                }
            }
        }
        for (_, vars) in by_period {
            if vars.len() > 1 {
                model.rows.push(ConstraintRow { vars, upper: 1.0 });
            }
        }
    }

    log::debug!(
        "assignment model: {} variables, {} rows",
        model.vars.len(),
        model.rows.len()
    );

    model
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SectionId, StudentId};

    fn student(id: &str, grade: u8, required: &[&str], electives: &[&str]) -> Student {
        Student {
            id: StudentId::new(id),
            name: String::new(),
            grade,
            required_courses: required.iter().map(|c| CourseId::new(*c)).collect(),
            elective_preferences: electives.iter().map(|c| CourseId::new(*c)).collect(),
        }
    }

    fn course(id: &str, grades: Option<Vec<u8>>) -> Course {
        Course {
            id: CourseId::new(id),
            name: String::new(),
            max_students: 30,
            periods_per_week: 5,
            grade_restrictions: grades,
            required_features: vec![],
            sections: 1,
        }
    }

    fn section(id: &str, course: &str, slot: u8, capacity: u32) -> Section {
        let mut s = Section::new(SectionId::new(id), CourseId::new(course), capacity);
        s.periods = (0..5).map(|d| Period::new(d, slot)).collect();
        s
    }

    #[test]
    fn required_courses_weigh_1000() {
        let s = student("s1", 10, &["alg"], &[]);
        assert_eq!(preference_weight(&s, &CourseId::new("alg")), Some(1000.0));
    }

    #[test]
    fn elective_weight_decays_with_rank() {
        let s = student("s1", 10, &[], &["a", "b", "c"]);
        assert_eq!(preference_weight(&s, &CourseId::new("a")), Some(10.0));
        assert_eq!(preference_weight(&s, &CourseId::new("c")), Some(8.0));
    }

    #[test]
    fn electives_past_rank_cutoff_get_no_variable() {
        let names: Vec<String> = (0..12).map(|i| format!("e{i}")).collect();
        let refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
        let s = student("s1", 10, &[], &refs);
        assert_eq!(preference_weight(&s, &CourseId::new("e9")), Some(1.0));
        assert_eq!(preference_weight(&s, &CourseId::new("e10")), None);
    }

    #[test]
    fn unrequested_courses_get_no_variable() {
        let students = vec![student("s1", 10, &["alg"], &[])];
        let courses = vec![course("alg", None), course("bio", None)];
        let sections = vec![section("alg-1", "alg", 0, 30), section("bio-1", "bio", 1, 30)];

        let model = build_assignment_model(&students, &sections, &courses);

        assert_eq!(model.vars.len(), 1);
        assert_eq!(model.vars[0].section, 0);
    }

    #[test]
    fn grade_restriction_filters_variables() {
        let students = vec![student("s1", 10, &["gov"], &[])];
        let courses = vec![course("gov", Some(vec![12]))];
        let sections = vec![section("gov-1", "gov", 0, 30)];

        let model = build_assignment_model(&students, &sections, &courses);

        assert!(model.vars.is_empty());
    }

    #[test]
    fn one_section_per_course_row_present() {
        let students = vec![student("s1", 10, &["alg"], &[])];
        let courses = vec![course("alg", None)];
        let sections = vec![
            section("alg-1", "alg", 0, 30),
            section("alg-2", "alg", 1, 30),
        ];

        let model = build_assignment_model(&students, &sections, &courses);

        // 2 vars; rows: course cap (2 vars) + 2 capacity rows
        assert_eq!(model.vars.len(), 2);
        let cap_one = model
            .rows
            .iter()
            .find(|r| r.vars.len() == 2 && r.upper == 1.0)
            .expect("course cap row");
        assert_eq!(cap_one.vars, vec![0, 1]);
    }

    #[test]
    fn contested_periods_produce_conflict_rows() {
        let students = vec![student("s1", 10, &["alg", "bio"], &[])];
        let courses = vec![course("alg", None), course("bio", None)];
        // Same slot: every weekday is contested
        let sections = vec![section("alg-1", "alg", 0, 30), section("bio-1", "bio", 0, 30)];

        let model = build_assignment_model(&students, &sections, &courses);

        let conflict_rows = model
            .rows
            .iter()
            .filter(|r| r.upper == 1.0 && r.vars.len() == 2)
            .count();
        // 5 period rows; no course-cap rows since each course has one section
        assert_eq!(conflict_rows, 5);
    }

    #[test]
    fn objective_sums_weighted_values() {
        let model = AssignmentModel {
            vars: vec![
                CandidateVar { student: 0, section: 0, weight: 1000.0 },
                CandidateVar { student: 0, section: 1, weight: 9.0 },
            ],
            rows: vec![],
        };
        assert_eq!(model.objective_of(&[1.0, 0.0]), 1000.0);
        assert_eq!(model.objective_of(&[1.0, 1.0]), 1009.0);
    }
}
