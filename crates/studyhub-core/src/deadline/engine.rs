//! Assignment deadline engine.
//!
//! `days_left` is cached on each record and refreshed by
//! [`DeadlineEngine::recompute_all`], which runs after every add or
//! replacement and on each tick of the recompute timer. Nothing else
//! writes it.
//!
//! The timer belongs to the engine: [`DeadlineEngine::start_ticker`]
//! spawns it, and stopping or dropping the engine aborts it.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = DeadlineEngine::with_clock(clock);
//! engine.start_ticker(Duration::from_secs(3600));
//! engine.add_assignment("Math", "Problem set 3", due);
//! while let Some(_recomputed) = engine.next_tick().await {
//!     for a in engine.sorted_view() { /* render */ }
//! }
//! ```

use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info};

use super::priority::Priority;
use super::ticker::RecomputeTicker;
use crate::clock::{Clock, SystemClock};
use crate::error::ValidationError;
use crate::events::Event;
use crate::id::RecordId;

/// Milliseconds in one day.
pub const DAY_MS: i64 = 86_400_000;

/// Whole days from `now` until `due`, rounded up. Negative once the due
/// instant has passed by more than a day.
pub fn days_until(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let diff_ms = (due - now).num_milliseconds();
    // ceil(a / b) for b > 0
    -((-diff_ms).div_euclid(DAY_MS))
}

/// Parse a due date. A bare `YYYY-MM-DD` means midnight UTC of that day;
/// RFC 3339 timestamps are taken as given.
pub fn parse_due(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field: "due date" });
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    id: RecordId,
    subject: String,
    title: String,
    due: DateTime<Utc>,
    days_left: i64,
}

impl Assignment {
    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn due(&self) -> DateTime<Utc> {
        self.due
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due.date_naive()
    }

    /// Value from the most recent recompute pass.
    pub fn days_left(&self) -> i64 {
        self.days_left
    }

    pub fn priority(&self) -> Priority {
        Priority::from_days_left(self.days_left)
    }
}

/// Owns the assignment list and its recompute timer. Generic over the
/// clock so tests can pin "now".
#[derive(Debug)]
pub struct DeadlineEngine<C: Clock = SystemClock> {
    clock: C,
    assignments: Vec<Assignment>,
    last_recomputed: DateTime<Utc>,
    ticker: Option<RecomputeTicker>,
}

impl DeadlineEngine<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for DeadlineEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> DeadlineEngine<C> {
    pub fn with_clock(clock: C) -> Self {
        let now = clock.now();
        Self {
            clock,
            assignments: Vec::new(),
            last_recomputed: now,
            ticker: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Assignments in insertion order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn get(&self, id: RecordId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    /// Resolve a typed id prefix. `None` unless exactly one record matches.
    pub fn resolve_prefix(&self, prefix: &str) -> Option<RecordId> {
        let mut hits = self
            .assignments
            .iter()
            .filter(|a| a.id.matches_prefix(prefix));
        match (hits.next(), hits.next()) {
            (Some(only), None) => Some(only.id),
            _ => None,
        }
    }

    /// All assignments, soonest first. Equal `days_left` keep insertion
    /// order. The stored order is untouched.
    pub fn sorted_view(&self) -> Vec<&Assignment> {
        let mut view: Vec<&Assignment> = self.assignments.iter().collect();
        view.sort_by_key(|a| a.days_left);
        view
    }

    pub fn last_recomputed(&self) -> DateTime<Utc> {
        self.last_recomputed
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn ticker_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(RecomputeTicker::is_running)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Add an assignment. Refused when subject or title is blank.
    pub fn add_assignment(
        &mut self,
        subject: &str,
        title: &str,
        due: DateTime<Utc>,
    ) -> Option<Event> {
        let (subject, title) = (subject.trim(), title.trim());
        if subject.is_empty() || title.is_empty() {
            debug!(subject, title, "assignment refused: missing subject or title");
            return None;
        }

        let now = self.clock.now();
        let assignment = Assignment {
            id: RecordId::new(),
            subject: subject.to_string(),
            title: title.to_string(),
            due,
            days_left: days_until(due, now),
        };
        let event = Event::AssignmentAdded {
            id: assignment.id,
            subject: assignment.subject.clone(),
            title: assignment.title.clone(),
            due,
            days_left: assignment.days_left,
            at: now,
        };
        info!(id = %assignment.id, subject, title, %due, "assignment added");
        self.assignments.push(assignment);
        self.recompute_all(now);
        Some(event)
    }

    /// Replace every field of an existing assignment, keeping its id and
    /// position. Same validation as [`Self::add_assignment`].
    pub fn replace_assignment(
        &mut self,
        id: RecordId,
        subject: &str,
        title: &str,
        due: DateTime<Utc>,
    ) -> Option<Event> {
        let (subject, title) = (subject.trim(), title.trim());
        if subject.is_empty() || title.is_empty() {
            debug!(%id, "assignment replacement refused: missing subject or title");
            return None;
        }
        let Some(existing) = self.assignments.iter_mut().find(|a| a.id == id) else {
            debug!(%id, "assignment replacement ignored: not found");
            return None;
        };

        existing.subject = subject.to_string();
        existing.title = title.to_string();
        existing.due = due;

        let now = self.clock.now();
        self.recompute_all(now);
        let days_left = self.get(id).map(Assignment::days_left)?;
        info!(%id, days_left, "assignment replaced");
        Some(Event::AssignmentReplaced {
            id,
            days_left,
            at: now,
        })
    }

    pub fn delete_assignment(&mut self, id: RecordId) -> Option<Event> {
        let Some(index) = self.assignments.iter().position(|a| a.id == id) else {
            debug!(%id, "assignment delete ignored: not found");
            return None;
        };
        self.assignments.remove(index);
        info!(%id, "assignment deleted");
        Some(Event::AssignmentDeleted {
            id,
            at: self.clock.now(),
        })
    }

    /// Re-derive `days_left` for every record against `now`.
    pub fn recompute_all(&mut self, now: DateTime<Utc>) -> Event {
        for assignment in &mut self.assignments {
            assignment.days_left = days_until(assignment.due, now);
        }
        self.last_recomputed = now;
        debug!(count = self.assignments.len(), %now, "deadlines recomputed");
        Event::DeadlinesRecomputed {
            count: self.assignments.len(),
            at: now,
        }
    }

    /// [`Self::recompute_all`] against the engine's own clock.
    pub fn refresh(&mut self) -> Event {
        let now = self.clock.now();
        self.recompute_all(now)
    }

    // ── Timer ────────────────────────────────────────────────────────

    /// Start the periodic recompute. Replaces (and aborts) a running
    /// ticker. Must be called inside a tokio runtime.
    pub fn start_ticker(&mut self, period: Duration) {
        self.ticker = Some(RecomputeTicker::start(period));
    }

    pub fn stop_ticker(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.stop();
        }
    }

    /// Wait for the next tick and recompute. `None` when no ticker runs.
    pub async fn next_tick(&mut self) -> Option<Event> {
        let ticker = self.ticker.as_mut()?;
        ticker.tick().await?;
        Some(self.refresh())
    }
}
