use crate::error::Result;
use crate::model::Schedule;

/// Full schedule document as pretty JSON.
pub fn render_json(schedule: &Schedule) -> Result<String> {
    Ok(serde_json::to_string_pretty(schedule)?)
}

/// Compact machine-readable summary, for `--quiet` runs.
#[derive(serde::Serialize)]
pub struct JsonSummary {
    pub total_sections: usize,
    pub total_assignments: usize,
    pub unassigned_count: usize,
    pub algorithm: String,
    pub score: f64,
    pub solve_time_ms: u64,
}

pub fn render_json_summary(schedule: &Schedule) -> Result<String> {
    let summary = JsonSummary {
        total_sections: schedule.sections.len(),
        total_assignments: schedule.seat_count(),
        unassigned_count: schedule.unassigned.len(),
        algorithm: schedule.metadata.algorithm.clone(),
        score: schedule.metadata.score,
        solve_time_ms: schedule.metadata.solve_time_ms,
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScheduleMetadata;

    #[test]
    fn schedule_round_trips_through_json() {
        let schedule = Schedule {
            sections: vec![],
            unassigned: vec![],
            metadata: ScheduleMetadata {
                algorithm: "greedy".to_string(),
                score: 88.5,
                ..Default::default()
            },
        };

        let text = render_json(&schedule).unwrap();
        let back: Schedule = serde_json::from_str(&text).unwrap();
        assert_eq!(back.metadata.algorithm, "greedy");
        assert_eq!(back.metadata.score, 88.5);
    }
}
