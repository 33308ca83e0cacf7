mod engine;
mod grade;

pub use engine::{
    parse_credits, parse_subject, Classification, GpaEngine, GpaSummary, Subject, SubjectUpdate,
};
pub use grade::Grade;
