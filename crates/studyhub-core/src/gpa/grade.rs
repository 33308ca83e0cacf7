//! Letter grades on the 10-point scale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "O")]
    O,
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "F")]
    F,
}

impl Grade {
    /// The grade table, best first.
    pub const ALL: [Grade; 7] = [
        Grade::O,
        Grade::APlus,
        Grade::A,
        Grade::BPlus,
        Grade::B,
        Grade::C,
        Grade::F,
    ];

    /// Grade points for this letter.
    pub fn points(self) -> u8 {
        match self {
            Grade::O => 10,
            Grade::APlus => 9,
            Grade::A => 8,
            Grade::BPlus => 7,
            Grade::B => 6,
            Grade::C => 5,
            Grade::F => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::O => "O",
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::C => "C",
            Grade::F => "F",
        }
    }

    /// Label used when offering the grade in a picker, e.g. `A+ (9 points)`.
    pub fn option_label(self) -> String {
        format!("{} ({} points)", self.as_str(), self.points())
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Grade::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownGrade(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_values() {
        let table: Vec<(&str, u8)> = Grade::ALL.iter().map(|g| (g.as_str(), g.points())).collect();
        assert_eq!(
            table,
            vec![("O", 10), ("A+", 9), ("A", 8), ("B+", 7), ("B", 6), ("C", 5), ("F", 0)]
        );
    }

    #[test]
    fn parse_accepts_table_letters_only() {
        assert_eq!("A+".parse::<Grade>().unwrap(), Grade::APlus);
        assert_eq!(" b+ ".parse::<Grade>().unwrap(), Grade::BPlus);
        assert_eq!("o".parse::<Grade>().unwrap(), Grade::O);
        assert!(matches!("D".parse::<Grade>(), Err(ValidationError::UnknownGrade(_))));
        assert!("".parse::<Grade>().is_err());
        assert!("A++".parse::<Grade>().is_err());
    }

    #[test]
    fn serde_uses_letters() {
        assert_eq!(serde_json::to_string(&Grade::BPlus).unwrap(), "\"B+\"");
        let g: Grade = serde_json::from_str("\"A+\"").unwrap();
        assert_eq!(g, Grade::APlus);
    }

    #[test]
    fn option_label_format() {
        assert_eq!(Grade::APlus.option_label(), "A+ (9 points)");
        assert_eq!(Grade::F.option_label(), "F (0 points)");
    }
}
