use crate::model::{Course, CourseId, Period, Room, RoomId, Section};
use std::collections::{HashMap, HashSet};

/// Phase 3: give each section the smallest room that fits.
///
/// Sections are visited in input order. Candidate rooms must cover the
/// course's required features and hold the section's nominal capacity;
/// candidates are tried smallest-capacity first so large rooms stay free
/// for large sections. A section with no workable candidate keeps
/// `room_id` absent.
pub fn assign_rooms(sections: &mut [Section], rooms: &[Room], courses: &[Course]) {
    let course_map: HashMap<&CourseId, &Course> = courses.iter().map(|c| (&c.id, c)).collect();

    // Seeded with unavailability, extended as sections land.
    let mut occupied: HashMap<&RoomId, HashSet<Period>> = rooms
        .iter()
        .map(|r| (&r.id, r.unavailable.iter().copied().collect()))
        .collect();

    for section in sections.iter_mut() {
        let required: &[String] = course_map
            .get(&section.course_id)
            .map(|c| c.required_features.as_slice())
            .unwrap_or(&[]);

        let mut candidates: Vec<&Room> = rooms
            .iter()
            .filter(|r| r.capacity >= section.capacity && r.covers(required))
            .collect();
        // Stable sort: equal capacities keep input order
        candidates.sort_by_key(|r| r.capacity);

        let chosen = candidates.into_iter().find(|room| {
            let busy = &occupied[&room.id];
            section.periods.iter().all(|p| !busy.contains(p))
        });

        if let Some(room) = chosen {
            section.room_id = Some(room.id.clone());
            occupied
                .get_mut(&room.id)
                .expect("seeded for every room")
                .extend(section.periods.iter().copied());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionId;

    fn course(id: &str, features: &[&str]) -> Course {
        Course {
            id: CourseId::new(id),
            name: String::new(),
            max_students: 20,
            periods_per_week: 5,
            grade_restrictions: None,
            required_features: features.iter().map(|f| f.to_string()).collect(),
            sections: 1,
        }
    }

    fn room(id: &str, capacity: u32, features: &[&str]) -> Room {
        Room {
            id: RoomId::new(id),
            name: String::new(),
            capacity,
            features: features.iter().map(|f| f.to_string()).collect(),
            unavailable: vec![],
        }
    }

    fn section(id: &str, course: &str, capacity: u32, slot: u8) -> Section {
        let mut s = Section::new(SectionId::new(id), CourseId::new(course), capacity);
        s.periods = (0..5).map(|d| Period::new(d, slot)).collect();
        s
    }

    #[test]
    fn smallest_sufficient_room_wins() {
        let rooms = vec![
            room("aud", 100, &[]),
            room("r12", 24, &[]),
            room("r15", 40, &[]),
        ];
        let mut sections = vec![section("alg-1", "alg", 20, 0)];

        assign_rooms(&mut sections, &rooms, &[course("alg", &[])]);

        assert_eq!(sections[0].room_id, Some(RoomId::new("r12")));
    }

    #[test]
    fn feature_superset_beats_size() {
        let rooms = vec![
            room("plain", 40, &[]),
            room("lab", 25, &["lab"]),
        ];
        let mut sections = vec![section("chem-1", "chem", 20, 0)];

        assign_rooms(&mut sections, &rooms, &[course("chem", &["lab"])]);

        assert_eq!(sections[0].room_id, Some(RoomId::new("lab")));
    }

    #[test]
    fn overlapping_sections_get_distinct_rooms() {
        let rooms = vec![room("a", 30, &[]), room("b", 30, &[])];
        let courses = vec![course("alg", &[]), course("bio", &[])];
        let mut sections = vec![
            section("alg-1", "alg", 20, 0),
            section("bio-1", "bio", 20, 0),
        ];

        assign_rooms(&mut sections, &rooms, &courses);

        assert_eq!(sections[0].room_id, Some(RoomId::new("a")));
        assert_eq!(sections[1].room_id, Some(RoomId::new("b")));
    }

    #[test]
    fn room_unavailability_blocks_assignment() {
        let mut blocked = room("a", 30, &[]);
        blocked.unavailable = (0..5).map(|d| Period::new(d, 0)).collect();
        let rooms = vec![blocked, room("b", 30, &[])];
        let mut sections = vec![section("alg-1", "alg", 20, 0)];

        assign_rooms(&mut sections, &rooms, &[course("alg", &[])]);

        assert_eq!(sections[0].room_id, Some(RoomId::new("b")));
    }

    #[test]
    fn impossible_requirement_leaves_room_absent() {
        let rooms = vec![room("plain", 40, &[])];
        let mut sections = vec![section("chem-1", "chem", 20, 0)];

        assign_rooms(&mut sections, &rooms, &[course("chem", &["lab"])]);

        assert_eq!(sections[0].room_id, None);
    }
}
