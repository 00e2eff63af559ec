use thiserror::Error;

/// Domain errors for timetable generation.
///
/// Solver failures are recovered inside the engine (greedy fallback) and
/// never reach callers; they exist here for adapter code that wants to
/// surface them directly.
#[derive(Error, Debug)]
pub enum TimetableError {
    // Input errors: surfaced before the engine starts
    #[error("failed to read '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{file}': {message}")]
    Parse { file: String, message: String },

    #[error("constraint file line {line}: {message}")]
    ConstraintSyntax { line: usize, message: String },

    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("{owner} references unknown course '{course_id}'")]
    UnknownCourse { owner: String, course_id: String },

    #[error("input validation failed with {count} errors:\n{details}")]
    InvalidInput { count: usize, details: String },

    // Solver errors
    #[error("MIP solver failed: {0}")]
    Solver(String),

    // Engine invariant violations: fatal, name the phase
    #[error("internal invariant violated in phase '{phase}': {message}")]
    Internal {
        phase: &'static str,
        message: String,
    },
}

/// Use anyhow::Result at application boundaries
pub type Result<T> = anyhow::Result<T>;
