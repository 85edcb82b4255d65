//! Password evaluator - runs every rule section and buckets the result.

use std::sync::LazyLock;

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::PolicyConfig;
use crate::sections::section_for;
use crate::types::{PasswordValidationResult, Rule};

/// Delay before an async evaluation runs, so bursts of keystrokes collapse into one.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

static DEFAULT_POLICY: LazyLock<PolicyConfig> = LazyLock::new(PolicyConfig::default);

/// Evaluates a password against the default policy.
pub fn evaluate(password: &SecretString) -> PasswordValidationResult {
    evaluate_with(password, &DEFAULT_POLICY)
}

/// Evaluates a password against `config`.
///
/// Every rule is checked; each failure contributes one entry to `errors`
/// in [`Rule::ALL`] order. Never fails: the empty password simply fails
/// every rule.
pub fn evaluate_with(password: &SecretString, config: &PolicyConfig) -> PasswordValidationResult {
    // Orchestrator: execute sections in sequence
    let failures: Vec<(Rule, String)> = Rule::ALL
        .iter()
        .filter_map(|&rule| section_for(rule)(password, config).map(|reason| (rule, reason)))
        .collect();

    PasswordValidationResult::from_failures(failures, config.medium_threshold, config.strong_threshold)
}

/// Debounced evaluation that sends the result via channel.
///
/// Waits [`DEBOUNCE`] first. If `token` is cancelled before the delay
/// elapses (a newer input superseded this one), nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: SecretString,
    config: std::sync::Arc<PolicyConfig>,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordValidationResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before debounce elapsed");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluate_with(&password, &config);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use std::sync::Arc;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx_sends_after_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluate_password_tx(secret("Abc12345!"), Arc::new(PolicyConfig::default()), token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert!(evaluation.is_valid);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluate_password_tx(secret("Abc12345!"), Arc::new(PolicyConfig::default()), token, tx).await;

        // sender dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_keystroke_supersedes_older() {
        let (tx, mut rx) = mpsc::channel(2);
        let config = Arc::new(PolicyConfig::default());

        let first = CancellationToken::new();
        let handle = tokio::spawn(evaluate_password_tx(
            secret("Abc"),
            config.clone(),
            first.clone(),
            tx.clone(),
        ));

        tokio::time::sleep(Duration::from_millis(100)).await;
        first.cancel();
        evaluate_password_tx(secret("Abc12345!"), config, CancellationToken::new(), tx).await;
        handle.await.expect("task");

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert!(evaluation.is_valid);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx_closed_receiver() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // must not panic
        evaluate_password_tx(
            secret("Abc12345!"),
            Arc::new(PolicyConfig::default()),
            CancellationToken::new(),
            tx,
        )
        .await;
    }
}
