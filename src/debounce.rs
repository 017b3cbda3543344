//! Keystroke-debounced assessment.
//!
//! Forms call the scorer on every input change. Each change spawns
//! [`assess_debounced`] with a fresh token and cancels the previous one,
//! so only the latest password is assessed once typing pauses.

use secrecy::SecretString;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::scorer::PasswordScorer;
use crate::types::PasswordAssessment;

/// Pause after the last keystroke before assessing.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Waits [`DEBOUNCE`], then assesses and sends the result via channel.
///
/// Returns as soon as `token` is cancelled, without sending anything.
pub async fn assess_debounced(
    scorer: &PasswordScorer,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordAssessment>,
) {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("assessment superseded by a newer keystroke");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let assessment = scorer.assess(password);

    if let Err(_e) = tx.send(assessment).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password assessment: {}", _e);
    }
}
