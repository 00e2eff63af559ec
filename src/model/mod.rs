mod config;
mod course;
mod ids;
mod period;
mod room;
mod rules;
mod schedule;
mod section;
mod student;
mod teacher;

pub use config::*;
pub use course::*;
pub use ids::*;
pub use period::*;
pub use room::*;
pub use rules::*;
pub use schedule::*;
pub use section::*;
pub use student::*;
pub use teacher::*;
