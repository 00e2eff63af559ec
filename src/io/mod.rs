mod constraints;
mod json;
mod validate;

pub use constraints::*;
pub use json::*;
pub use validate::*;
