//! # StudyHub Core Library
//!
//! Business logic for the StudyHub student dashboard. Every view keeps its
//! state in an explicitly owned engine; front ends (the `studyhub` CLI)
//! read engine state and render it, and never feed anything back except
//! user commands.
//!
//! ## Architecture
//!
//! - **GPA Engine**: subject table with credit-weighted CGPA on a 10-point scale
//! - **Deadline Engine**: assignments with `days_left` derived from an
//!   injectable clock, refreshed by a periodic [`RecomputeTicker`]
//! - **Notes Directory**: semester Drive links with expand/collapse state
//! - **Shell**: which of the four views is active
//!
//! ## Key Components
//!
//! - [`GpaEngine`]: subject table and derived totals
//! - [`DeadlineEngine`]: assignment list and priority bands
//! - [`NotesDirectory`]: semester links and the clipboard/browser effects
//! - [`Dashboard`]: the four views side by side
//! - [`Config`]: application configuration management

pub mod clock;
pub mod dashboard;
pub mod deadline;
pub mod error;
pub mod events;
pub mod gpa;
pub mod id;
pub mod notes;
pub mod shell;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use dashboard::Dashboard;
pub use deadline::{Assignment, DeadlineEngine, Priority, RecomputeTicker};
pub use error::{ConfigError, LinkError, ValidationError};
pub use events::Event;
pub use gpa::{Classification, GpaEngine, GpaSummary, Grade, Subject, SubjectUpdate};
pub use id::RecordId;
pub use notes::{Clipboard, LinkOpener, NotesDirectory, Semester, SystemBrowser, SystemClipboard};
pub use shell::{HomeCard, Shell, View, HOME_CARDS};
pub use storage::Config;
