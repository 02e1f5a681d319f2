//! Advisory password strength meter.
//!
//! Rates a candidate password against a fixed additive rubric of six
//! criteria and reports a bounded score, a strength category, and
//! remediation labels for the criteria the password misses. The rating is
//! for display only (strength bars, hint lists); it never decides whether
//! a password is accepted.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{score_password, Strength};
//!
//! let report = score_password("Abcdefgh1");
//!
//! assert_eq!(report.score, 4);
//! assert_eq!(report.strength(), Strength::Medium);
//! println!("fill the meter to {:.0}%", report.ratio() * 100.0);
//! for hint in &report.unmet {
//!     println!("- {hint}");
//! }
//! ```

// Internal modules
mod criteria;
mod report;
mod scorer;

// Public API
pub use criteria::MAX_SCORE;
pub use report::{ParseStrengthError, Strength, StrengthReport};
pub use scorer::{score_password, score_secret};

#[cfg(feature = "async")]
pub use scorer::score_password_tx;
