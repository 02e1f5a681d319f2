//! Strength categories and the report value object.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::criteria::MAX_SCORE;

/// Human-readable strength category derived from the numeric score.
///
/// `Empty` is the sentinel for zero input (nothing typed yet) and is kept
/// distinct from `Weak`, the lowest category a non-empty candidate can earn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Empty,
    Weak,
    Fair,
    Medium,
    Strong,
}

impl Strength {
    /// Maps a score to its category. Thresholds are checked highest first.
    pub fn for_score(score: u8) -> Self {
        match score {
            s if s >= 5 => Strength::Strong,
            s if s >= 3 => Strength::Medium,
            s if s >= 1 => Strength::Fair,
            _ => Strength::Weak,
        }
    }

    /// Display label; empty string for the zero-input sentinel.
    pub fn label(&self) -> &'static str {
        match self {
            Strength::Empty => "",
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strength label: {0:?}")]
pub struct ParseStrengthError(String);

impl FromStr for Strength {
    type Err = ParseStrengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Strength::Empty),
            "Weak" => Ok(Strength::Weak),
            "Fair" => Ok(Strength::Fair),
            "Medium" => Ok(Strength::Medium),
            "Strong" => Ok(Strength::Strong),
            other => Err(ParseStrengthError(other.to_string())),
        }
    }
}

/// Result of rating one candidate password.
///
/// Created and discarded within a single scoring call; carries no state
/// across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// Number of satisfied criteria, `0..=MAX_SCORE`.
    pub score: u8,
    /// Remediation labels for unsatisfied criteria, in evaluation order.
    /// Criteria without a label contribute to the score only.
    pub unmet: Vec<&'static str>,
    strength: Strength,
}

impl StrengthReport {
    /// The sentinel report for an empty candidate.
    pub(crate) fn empty() -> Self {
        StrengthReport {
            score: 0,
            unmet: Vec::new(),
            strength: Strength::Empty,
        }
    }

    /// A report for a non-empty candidate; the category follows from the score.
    pub(crate) fn rated(score: u8, unmet: Vec<&'static str>) -> Self {
        StrengthReport {
            score,
            unmet,
            strength: Strength::for_score(score),
        }
    }

    /// The strength category for this report.
    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Fraction of the maximum score, in `[0, 1]`. Meant for proportional
    /// display such as a progress-bar fill.
    pub fn ratio(&self) -> f64 {
        f64::from(self.score) / f64::from(MAX_SCORE)
    }
}
