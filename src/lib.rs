//! Weekly school timetable generation.
//!
//! The engine turns a roster of students, teachers, courses, and rooms into
//! a conflict-free weekly schedule in five phases:
//!
//! 1. **Section materialization**: one section per course offering, teachers
//!    assigned round-robin among the qualified pool
//! 2. **Time slot assignment**: one slot per section, replicated across the
//!    week, chosen by a penalty-minimizing greedy
//! 3. **Room assignment**: smallest feasible room whose features cover the
//!    course requirements
//! 4. **Student enrollment**: binary ILP maximizing weighted preferences,
//!    with a two-pass greedy fallback
//! 5. **Rebalancing**: local moves from the fullest to the emptiest section
//!    of each course
//!
//! # Example
//!
//! ```no_run
//! use timetabler::engine::{generate_schedule, SolveOptions};
//! use timetabler::io::load_input_from_dir;
//! use std::path::Path;
//!
//! let input = load_input_from_dir(Path::new("./data")).unwrap();
//! let schedule = generate_schedule(&input, SolveOptions::default()).unwrap();
//! println!("score: {:.1}/100", schedule.metadata.score);
//! ```

pub mod audit;
pub mod engine;
pub mod error;
pub mod io;
pub mod model;
pub mod report;

pub use error::{Result, TimetableError};
