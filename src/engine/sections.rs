use crate::model::{Course, Section, SectionId, Teacher, TeacherId};
use std::collections::HashMap;

/// Phase 1: materialize empty sections and hand out teachers.
///
/// Courses are processed in input order. Each course's sections draw from
/// the pool of teachers that are qualified and still under `max_sections`,
/// round-robin by section index. A course with an empty pool produces
/// un-teachered sections; the audit surfaces those later.
pub fn materialize_sections(courses: &[Course], teachers: &[Teacher]) -> Vec<Section> {
    let mut load: HashMap<&TeacherId, u8> = HashMap::new();
    let mut sections = Vec::new();

    for course in courses {
        for i in 0..course.sections as usize {
            let id = SectionId::new(format!("{}-{}", course.id, i + 1));
            let mut section = Section::new(id, course.id.clone(), course.max_students);

            // The pool shrinks as teachers fill up, so re-filter per section.
            let pool: Vec<&Teacher> = teachers
                .iter()
                .filter(|t| t.qualified_for(&course.id))
                .filter(|t| load.get(&t.id).copied().unwrap_or(0) < t.max_sections)
                .collect();

            if !pool.is_empty() {
                let teacher = pool[i % pool.len()];
                section.teacher_id = Some(teacher.id.clone());
                *load.entry(&teacher.id).or_insert(0) += 1;
            }

            sections.push(section);
        }
    }

    sections
}
