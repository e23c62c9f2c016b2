//! Password strength scorer - runs the scoring sections and bands the result.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    SectionScore, character_variety_section, common_sequence_section, length_section,
    repetition_section,
};
use crate::types::PasswordScore;

/// Delay before a keystroke-triggered evaluation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE_DELAY: std::time::Duration = std::time::Duration::from_millis(300);

/// Scores a password into one of the strength bands.
///
/// Total over every input: an empty password yields the "Enter a password"
/// score, anything else is summed over the sections and banded.
pub fn score(password: &SecretString) -> PasswordScore {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return PasswordScore::empty();
    }

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&str) -> SectionScore); 4] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("repetition", repetition_section),
        ("sequence", common_sequence_section),
    ];

    let mut raw: i64 = 0;
    for (_section_name, section_fn) in sections {
        let delta = section_fn(pwd);
        #[cfg(feature = "tracing")]
        if delta != 0 {
            tracing::trace!(section = _section_name, delta, "section applied");
        }
        raw += delta;
    }

    let result = PasswordScore::from_raw(raw);

    #[cfg(feature = "tracing")]
    tracing::debug!(raw, band = %result.strength(), "password scored");

    result
}

/// Debounced scoring for live input.
///
/// Waits [`DEBOUNCE_DELAY`], then scores the password and sends the result,
/// unless `token` was cancelled meanwhile because a newer keystroke
/// superseded this one.
#[cfg(feature = "async")]
pub async fn score_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordScore>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password scoring superseded before it started");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE_DELAY) => {}
    }

    let result = score(password);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password score: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_score_tx_sends_after_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let pwd = SecretString::new("TestPass123!".to_string().into());

        score_tx(&pwd, token, tx).await;

        let result = rx.recv().await.expect("Should receive score");
        assert_eq!(result, score(&pwd));
    }

    #[tokio::test(start_paused = true)]
    async fn test_score_tx_cancelled_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();
        let pwd = SecretString::new("TestPass123!".to_string().into());

        score_tx(&pwd, token, tx).await;

        // Sender was dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_score_tx_cancelled_during_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let canceller = token.clone();

        let handle = tokio::spawn(async move {
            let pwd = SecretString::new("abc".to_string().into());
            score_tx(&pwd, token, tx).await;
        });

        tokio::time::sleep(DEBOUNCE_DELAY / 2).await;
        canceller.cancel();
        handle.await.expect("task should finish");

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_score_tx_closed_receiver_does_not_panic() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let pwd = SecretString::new("abc".to_string().into());
        score_tx(&pwd, CancellationToken::new(), tx).await;
    }
}
