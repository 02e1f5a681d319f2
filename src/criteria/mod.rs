//! Scoring criteria
//!
//! Each criterion is an independent boolean rule worth one point. The table
//! order fixes the order of remediation labels in a report.

mod classes;
mod length;

use classes::{has_digit, has_lowercase, has_special, has_uppercase};
use length::{meets_bonus_length, meets_min_length};

/// One additive scoring rule.
///
/// `feedback` is the remediation label appended when the rule is not
/// satisfied; `None` marks a bonus rule that scores a point but has no
/// user-facing hint.
pub(crate) struct Criterion {
    pub check: fn(&str) -> bool,
    pub feedback: Option<&'static str>,
}

/// The fixed rubric, in evaluation order.
pub(crate) const CRITERIA: [Criterion; 6] = [
    Criterion {
        check: meets_min_length,
        feedback: Some("Must be at least 8 characters"),
    },
    // Bonus point for extra length, deliberately without a hint.
    Criterion {
        check: meets_bonus_length,
        feedback: None,
    },
    Criterion {
        check: has_lowercase,
        feedback: Some("Add at least one lowercase letter"),
    },
    Criterion {
        check: has_uppercase,
        feedback: Some("Add at least one uppercase letter"),
    },
    Criterion {
        check: has_digit,
        feedback: Some("Add at least one number"),
    },
    Criterion {
        check: has_special,
        feedback: Some("Add at least one special character"),
    },
];

/// Maximum attainable score: one point per criterion.
pub const MAX_SCORE: u8 = CRITERIA.len() as u8;
