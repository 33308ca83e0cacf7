//! Credit-weighted GPA engine.
//!
//! Owns the subject table and keeps the derived totals current: every
//! accepted mutation re-derives `total_credits` and `cgpa` before it
//! returns, so a reader never sees stale totals.
//!
//! ## Invariants
//!
//! - `Subject::grade_points` always equals `grade.points()`; the only way
//!   to change a grade is [`GpaEngine::update_subject`], which sets both in
//!   the same call.
//! - `cgpa` is `0.0` when no credits are recorded, never NaN.
//! - Totals are summed in `u64`; `u32::MAX` credits at grade O still fit.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::grade::Grade;
use crate::clock::{Clock, SystemClock};
use crate::error::ValidationError;
use crate::events::Event;
use crate::id::RecordId;

/// One row of the GPA table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subject {
    id: RecordId,
    name: String,
    credits: u32,
    grade: Grade,
    grade_points: u8,
}

impl Subject {
    fn new(name: String, credits: u32, grade: Grade) -> Self {
        Self {
            id: RecordId::new(),
            name,
            credits,
            grade,
            grade_points: grade.points(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn grade_points(&self) -> u8 {
        self.grade_points
    }

    /// `credits * grade_points`.
    pub fn total_points(&self) -> u64 {
        u64::from(self.credits) * u64::from(self.grade_points)
    }
}

/// A single-field edit of an existing subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectUpdate {
    Name(String),
    Credits(u32),
    Grade(Grade),
}

impl SubjectUpdate {
    /// Build an update from a field name and its raw value.
    pub fn parse(field: &str, value: &str) -> Result<Self, ValidationError> {
        match field.trim().to_ascii_lowercase().as_str() {
            "name" => {
                let name = value.trim();
                if name.is_empty() {
                    return Err(ValidationError::EmptyField { field: "name" });
                }
                Ok(SubjectUpdate::Name(name.to_string()))
            }
            "credits" => parse_credits(value).map(SubjectUpdate::Credits),
            "grade" => value.parse().map(SubjectUpdate::Grade),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            SubjectUpdate::Name(_) => "name",
            SubjectUpdate::Credits(_) => "credits",
            SubjectUpdate::Grade(_) => "grade",
        }
    }
}

/// Parse a credit count typed by the user.
pub fn parse_credits(raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field: "credits" });
    }
    match trimmed.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ValidationError::InvalidCredits(raw.to_string())),
    }
}

/// Turn the three raw form fields into typed values.
pub fn parse_subject(
    name: &str,
    credits: &str,
    grade: &str,
) -> Result<(String, u32, Grade), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyField { field: "name" });
    }
    if grade.trim().is_empty() {
        return Err(ValidationError::EmptyField { field: "grade" });
    }
    let credits = parse_credits(credits)?;
    let grade = grade.parse()?;
    Ok((name.to_string(), credits, grade))
}

/// Display band for a CGPA. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Outstanding,
    Excellent,
    VeryGood,
    Good,
    Average,
    BelowAverage,
}

impl Classification {
    pub fn from_cgpa(cgpa: f64) -> Self {
        if cgpa >= 9.0 {
            Classification::Outstanding
        } else if cgpa >= 8.0 {
            Classification::Excellent
        } else if cgpa >= 7.0 {
            Classification::VeryGood
        } else if cgpa >= 6.0 {
            Classification::Good
        } else if cgpa >= 5.0 {
            Classification::Average
        } else {
            Classification::BelowAverage
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Classification::Outstanding => "Outstanding",
            Classification::Excellent => "Excellent",
            Classification::VeryGood => "Very Good",
            Classification::Good => "Good",
            Classification::Average => "Average",
            Classification::BelowAverage => "Below Average",
        }
    }
}

/// Derived totals over the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpaSummary {
    pub total_credits: u64,
    pub total_points: u64,
    pub cgpa: f64,
    pub classification: Classification,
}

impl GpaSummary {
    fn derive(subjects: &[Subject]) -> Self {
        let total_credits: u64 = subjects.iter().map(|s| u64::from(s.credits)).sum();
        let total_points: u64 = subjects.iter().map(Subject::total_points).sum();
        let cgpa = if total_credits > 0 {
            total_points as f64 / total_credits as f64
        } else {
            0.0
        };
        Self {
            total_credits,
            total_points,
            cgpa,
            classification: Classification::from_cgpa(cgpa),
        }
    }

    /// CGPA rounded to two decimals, as shown to the user.
    pub fn cgpa_display(&self) -> String {
        format!("{:.2}", self.cgpa)
    }
}

/// Owns the subject table. The clock only stamps emitted events.
#[derive(Debug, Clone)]
pub struct GpaEngine<C: Clock = SystemClock> {
    clock: C,
    subjects: Vec<Subject>,
    summary: GpaSummary,
}

impl GpaEngine<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for GpaEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> GpaEngine<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            subjects: Vec::new(),
            summary: GpaSummary::derive(&[]),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Subjects in insertion order.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn get(&self, id: RecordId) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Resolve a typed id prefix. `None` when nothing or more than one
    /// subject matches.
    pub fn resolve_prefix(&self, prefix: &str) -> Option<RecordId> {
        let mut hits = self.subjects.iter().filter(|s| s.id.matches_prefix(prefix));
        match (hits.next(), hits.next()) {
            (Some(only), None) => Some(only.id),
            _ => None,
        }
    }

    pub fn summary(&self) -> &GpaSummary {
        &self.summary
    }

    pub fn total_credits(&self) -> u64 {
        self.summary.total_credits
    }

    pub fn cgpa(&self) -> f64 {
        self.summary.cgpa
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Append a subject. Refused (no event, no change) when the name is
    /// blank or credits are zero.
    pub fn add_subject(&mut self, name: &str, credits: u32, grade: Grade) -> Option<Event> {
        let name = name.trim();
        if name.is_empty() || credits == 0 {
            debug!(name, credits, "subject refused: missing name or credits");
            return None;
        }

        let subject = Subject::new(name.to_string(), credits, grade);
        let event = Event::SubjectAdded {
            id: subject.id,
            name: subject.name.clone(),
            credits,
            grade,
            grade_points: subject.grade_points,
            at: self.clock.now(),
        };
        info!(id = %subject.id, name, credits, grade = %grade, "subject added");
        self.subjects.push(subject);
        self.derive();
        Some(event)
    }

    /// Apply a single-field edit. A grade edit re-derives grade points in
    /// the same step. Unknown ids, blank names and zero credits are no-ops.
    pub fn update_subject(&mut self, id: RecordId, update: SubjectUpdate) -> Option<Event> {
        let Some(subject) = self.subjects.iter_mut().find(|s| s.id == id) else {
            debug!(%id, "subject update ignored: not found");
            return None;
        };

        let field = update.field();
        match update {
            SubjectUpdate::Name(name) => {
                let name = name.trim();
                if name.is_empty() {
                    debug!(%id, "subject update refused: blank name");
                    return None;
                }
                subject.name = name.to_string();
            }
            SubjectUpdate::Credits(0) => {
                debug!(%id, "subject update refused: zero credits");
                return None;
            }
            SubjectUpdate::Credits(credits) => subject.credits = credits,
            SubjectUpdate::Grade(grade) => {
                subject.grade = grade;
                subject.grade_points = grade.points();
            }
        }

        info!(%id, field, "subject updated");
        self.derive();
        Some(Event::SubjectUpdated {
            id,
            field: field.to_string(),
            at: self.clock.now(),
        })
    }

    pub fn delete_subject(&mut self, id: RecordId) -> Option<Event> {
        let index = self.subjects.iter().position(|s| s.id == id)?;
        self.subjects.remove(index);
        info!(%id, "subject deleted");
        self.derive();
        Some(Event::SubjectDeleted {
            id,
            at: self.clock.now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn derive(&mut self) {
        self.summary = GpaSummary::derive(&self.subjects);
    }
}
