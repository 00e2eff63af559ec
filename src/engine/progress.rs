use serde::Serialize;

/// Pipeline stage announced to progress observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SolvePhase {
    Initializing,
    Assigning,
    Optimizing,
    Complete,
}

/// Optional counters attached to an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgressCounters {
    pub students_assigned: Option<usize>,
    pub sections_created: Option<usize>,
}

/// One progress report. Percent is monotonic non-decreasing within a solve.
#[derive(Debug, Clone)]
pub struct ProgressEvent {
    pub phase: SolvePhase,
    pub percent: u8,
    pub operation: String,
    pub counters: Option<ProgressCounters>,
}

/// Observer callback; invoked inline on the engine thread, so it must
/// return promptly.
pub type ProgressCallback<'a> = dyn FnMut(ProgressEvent) + 'a;

/// Internal emitter. Clamps percent so observers never see it regress,
/// whatever order the phases report in.
pub(crate) struct ProgressSink<'a> {
    callback: Option<Box<ProgressCallback<'a>>>,
    high_water: u8,
}

impl<'a> ProgressSink<'a> {
    pub fn new(callback: Option<Box<ProgressCallback<'a>>>) -> Self {
        Self {
            callback,
            high_water: 0,
        }
    }

    pub fn emit(&mut self, phase: SolvePhase, percent: u8, operation: impl Into<String>) {
        self.emit_with(phase, percent, operation, None);
    }

    pub fn emit_with(
        &mut self,
        phase: SolvePhase,
        percent: u8,
        operation: impl Into<String>,
        counters: Option<ProgressCounters>,
    ) {
        let percent = percent.min(100).max(self.high_water);
        self.high_water = percent;

        if let Some(callback) = self.callback.as_mut() {
            callback(ProgressEvent {
                phase,
                percent,
                operation: operation.into(),
                counters,
            });
        }
    }
}
