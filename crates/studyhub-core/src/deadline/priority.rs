use serde::{Deserialize, Serialize};

/// Priority band derived from `days_left`.
///
/// | days_left | band     |
/// |-----------|----------|
/// | < 0       | overdue  |
/// | 0..=3     | urgent   |
/// | 4..=7     | upcoming |
/// | > 7       | normal   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Overdue,
    Urgent,
    Upcoming,
    Normal,
}

impl Priority {
    pub fn from_days_left(days_left: i64) -> Self {
        match days_left {
            d if d < 0 => Priority::Overdue,
            0..=3 => Priority::Urgent,
            4..=7 => Priority::Upcoming,
            _ => Priority::Normal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Overdue => "overdue",
            Priority::Urgent => "urgent",
            Priority::Upcoming => "upcoming",
            Priority::Normal => "normal",
        }
    }

    /// Overdue and urgent records get a warning marker.
    pub fn needs_attention(self) -> bool {
        matches!(self, Priority::Overdue | Priority::Urgent)
    }
}
