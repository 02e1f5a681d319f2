//! Length criteria - minimum length plus a no-hint bonus threshold.

const MIN_LENGTH: usize = 8;
const BONUS_LENGTH: usize = 12;

/// Checks the minimum length criterion (≥ 8 characters).
pub(crate) fn meets_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}

/// Checks the bonus length criterion (≥ 12 characters).
pub(crate) fn meets_bonus_length(password: &str) -> bool {
    password.chars().count() >= BONUS_LENGTH
}
