pub mod config;
pub mod deadlines;
pub mod gpa;
pub mod notes;
pub mod shell;
