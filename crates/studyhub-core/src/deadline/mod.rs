mod engine;
mod priority;
mod ticker;

pub use engine::{days_until, parse_due, Assignment, DeadlineEngine, DAY_MS};
pub use priority::Priority;
pub use ticker::{RecomputeTicker, DEFAULT_PERIOD};
