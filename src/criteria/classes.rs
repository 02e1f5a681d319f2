//! Character-class criteria - lowercase, uppercase, digits, special chars.
//!
//! Classification is by ASCII ranges, not Unicode case folding: anything
//! outside ASCII alphanumerics counts as a special character, so non-ASCII
//! letters satisfy the special-character rule rather than the letter rules.

pub(crate) fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub(crate) fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub(crate) fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub(crate) fn has_special(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}
