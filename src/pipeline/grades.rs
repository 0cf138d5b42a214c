//! Letter grades and performance classification

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Letter grade assigned from a numeric mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

/// Coarse performance bucket derived from a grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Performance {
    Good,
    Neutral,
    Poor,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid grade (expected one of A, B, C, D, F)")]
pub struct ParseGradeError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid performance (expected Good, Neutral or Poor)")]
pub struct ParsePerformanceError(pub String);

impl Grade {
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

impl FromStr for Grade {
    type Err = ParseGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "F" => Ok(Grade::F),
            _ => Err(ParseGradeError(s.to_string())),
        }
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Performance::Good => "Good",
            Performance::Neutral => "Neutral",
            Performance::Poor => "Poor",
        };
        f.write_str(label)
    }
}

impl FromStr for Performance {
    type Err = ParsePerformanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Good" => Ok(Performance::Good),
            "Neutral" => Ok(Performance::Neutral),
            "Poor" => Ok(Performance::Poor),
            _ => Err(ParsePerformanceError(s.to_string())),
        }
    }
}

/// Map a grade to its performance bucket: A/B are Good, D/F are Poor, C is Neutral.
pub fn categorize(grade: Grade) -> Performance {
    match grade {
        Grade::A | Grade::B => Performance::Good,
        Grade::D | Grade::F => Performance::Poor,
        Grade::C => Performance::Neutral,
    }
}

/// Classify a raw grade cell. Null or unrecognised values are Neutral.
pub fn classify_cell(cell: Option<&str>) -> Performance {
    cell.and_then(|s| s.parse::<Grade>().ok())
        .map(categorize)
        .unwrap_or(Performance::Neutral)
}
