use crate::model::{Schedule, SchedulingInput};

/// Master week grid: one cell per (slot, day), each cell listing the
/// section labels meeting there.
#[derive(Debug, Clone)]
pub struct TimetableGrid {
    pub days: u8,
    pub slots: u8,
    /// Indexed `cells[slot][day]`
    pub cells: Vec<Vec<Vec<String>>>,
}

impl TimetableGrid {
    pub fn build(schedule: &Schedule, input: &SchedulingInput) -> Self {
        let days = input.config.days_per_week;
        let slots = input.config.periods_per_day;
        let mut cells = vec![vec![Vec::new(); days as usize]; slots as usize];

        for section in &schedule.sections {
            let label = match &section.room_id {
                Some(room) => format!("{} ({})", section.id, room),
                None => section.id.to_string(),
            };
            for period in &section.periods {
                if period.slot < slots && period.day < days {
                    cells[period.slot as usize][period.day as usize].push(label.clone());
                }
            }
        }

        Self { days, slots, cells }
    }

    pub fn cell(&self, slot: u8, day: u8) -> &[String] {
        &self.cells[slot as usize][day as usize]
    }

    /// Render as a markdown table, slots down, days across.
    pub fn to_markdown(&self) -> String {
        let day_names = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        let mut lines = Vec::new();

        let header: Vec<&str> = (0..self.days)
            .map(|d| day_names.get(d as usize).copied().unwrap_or("?"))
            .collect();
        lines.push(format!("| Period | {} |", header.join(" | ")));
        lines.push(format!("|--------|{}|", "------|".repeat(self.days as usize)));

        for slot in 0..self.slots {
            let row: Vec<String> = (0..self.days)
                .map(|day| {
                    let cell = self.cell(slot, day);
                    if cell.is_empty() {
                        "—".to_string()
                    } else {
                        cell.join("<br>")
                    }
                })
                .collect();
            lines.push(format!("| P{} | {} |", slot + 1, row.join(" | ")));
        }

        lines.join("\n")
    }
}
