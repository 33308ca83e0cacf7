use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::gpa::Grade;
use crate::id::RecordId;
use crate::shell::View;

/// Every accepted state change in the system produces an Event.
/// A refused or not-found mutation produces none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SubjectAdded {
        id: RecordId,
        name: String,
        credits: u32,
        grade: Grade,
        grade_points: u8,
        at: DateTime<Utc>,
    },
    SubjectUpdated {
        id: RecordId,
        field: String,
        at: DateTime<Utc>,
    },
    SubjectDeleted {
        id: RecordId,
        at: DateTime<Utc>,
    },
    AssignmentAdded {
        id: RecordId,
        subject: String,
        title: String,
        due: DateTime<Utc>,
        days_left: i64,
        at: DateTime<Utc>,
    },
    AssignmentReplaced {
        id: RecordId,
        days_left: i64,
        at: DateTime<Utc>,
    },
    AssignmentDeleted {
        id: RecordId,
        at: DateTime<Utc>,
    },
    /// Every assignment's `days_left` was re-derived against `at`.
    DeadlinesRecomputed {
        count: usize,
        at: DateTime<Utc>,
    },
    SemesterToggled {
        semester_id: u8,
        expanded: bool,
        at: DateTime<Utc>,
    },
    ViewChanged {
        from: View,
        to: View,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Id of the record the event concerns, if any.
    pub fn record_id(&self) -> Option<RecordId> {
        match self {
            Event::SubjectAdded { id, .. }
            | Event::SubjectUpdated { id, .. }
            | Event::SubjectDeleted { id, .. }
            | Event::AssignmentAdded { id, .. }
            | Event::AssignmentReplaced { id, .. }
            | Event::AssignmentDeleted { id, .. } => Some(*id),
            _ => None,
        }
    }
}
