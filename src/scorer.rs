//! Password strength scorer - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::criteria::CRITERIA;
use crate::report::StrengthReport;

/// Rates a candidate password against the fixed rubric.
///
/// Pure and total: any string is accepted, including empty, whitespace-only
/// and non-ASCII input, and the same input always yields the same report.
///
/// # Arguments
/// * `password` - The candidate to rate, scored literally (no trimming)
///
/// # Returns
/// A `StrengthReport` with the score, category and remediation labels.
pub fn score_password(password: &str) -> StrengthReport {
    if password.is_empty() {
        // Nothing typed yet: sentinel state, no remediation labels.
        return StrengthReport::empty();
    }

    let mut score: u8 = 0;
    let mut unmet = Vec::new();

    for criterion in &CRITERIA {
        if (criterion.check)(password) {
            score += 1;
        } else if let Some(feedback) = criterion.feedback {
            unmet.push(feedback);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(score, unmet = unmet.len(), "password rated");

    StrengthReport::rated(score, unmet)
}

/// Rates a password held in a [`SecretString`].
///
/// Convenience wrapper so callers handling secrets never expose the value
/// at the call site; delegates to [`score_password`].
pub fn score_secret(password: &SecretString) -> StrengthReport {
    score_password(password.expose_secret())
}

/// Async version that sends the report via channel.
///
/// Skips the evaluation entirely when `token` is already cancelled, e.g.
/// because a newer keystroke superseded this one. Debouncing of repeated
/// invocations is the caller's concern.
#[cfg(feature = "async")]
pub async fn score_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("rating cancelled before evaluation");
        return;
    }

    let report = score_secret(password);

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength report: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::report::Strength;

    #[tokio::test]
    async fn test_score_password_tx_sends_report() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let pwd = SecretString::new("TestPass123!".to_string().into());

        score_password_tx(&pwd, token, tx).await;

        let report = rx.recv().await.expect("Should receive report");
        assert_eq!(report.strength(), Strength::Strong);
    }

    #[tokio::test]
    async fn test_score_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        score_password_tx(&pwd, token, tx).await;

        // Sender dropped without sending
        assert!(rx.recv().await.is_none());
    }
}
