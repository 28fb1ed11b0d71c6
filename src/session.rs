//! Debounced per-field evaluation sessions.
//!
//! One session per input field. Each keystroke re-arms the debounce timer
//! (last keystroke wins); when it fires, local scoring runs and the breach
//! lookup is issued, and the merged result is delivered on the session's
//! event channel. A monotonically increasing request sequence suppresses
//! stale responses: only the most recent request may update visible state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::backend::BackendClient;
use crate::evaluator::evaluate_password_strength;
use crate::types::{AnalysisResult, BreachStatus};

/// Default delay between the last keystroke and evaluation.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Minimum input length evaluated by the always-on field engine.
pub const FIELD_MIN_PASSWORD_LENGTH: usize = 4;

/// Minimum input length evaluated by the full-page engine.
pub const PAGE_MIN_PASSWORD_LENGTH: usize = 1;

/// Tunable evaluation behavior for one session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How long input must stay quiet before evaluation runs.
    pub debounce: Duration,
    /// Inputs shorter than this are not evaluated; visible results clear.
    pub min_length: usize,
    /// When false, the breach lookup is skipped entirely and results carry
    /// an unchecked breach status.
    pub check_breaches: bool,
}

impl SessionConfig {
    /// Preset for the always-on field engine attached to discovered
    /// password inputs.
    pub fn field() -> Self {
        SessionConfig {
            debounce: Duration::from_millis(500),
            min_length: FIELD_MIN_PASSWORD_LENGTH,
            check_breaches: true,
        }
    }

    /// Preset for the full-page engine, which evaluates any non-empty input.
    pub fn page() -> Self {
        SessionConfig {
            debounce: DEFAULT_DEBOUNCE,
            min_length: PAGE_MIN_PASSWORD_LENGTH,
            check_breaches: true,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig::page()
    }
}

/// What a session delivers to its presentation collaborator.
#[derive(Debug)]
pub enum SessionEvent {
    /// A debounced evaluation settled with a merged result.
    Settled(AnalysisResult),
    /// Input dropped below the threshold; clear any visible result.
    Cleared,
}

/// Per-field evaluation pipeline.
///
/// The session exclusively owns its debounce token and request sequence;
/// nothing is shared across fields. Generated passwords are analyzed by
/// feeding them through [`EvaluationSession::input`] exactly like typed
/// input.
pub struct EvaluationSession {
    config: SessionConfig,
    client: BackendClient,
    tx: mpsc::Sender<SessionEvent>,
    pending: Option<CancellationToken>,
    issued: Arc<AtomicU64>,
}

impl EvaluationSession {
    pub fn new(
        config: SessionConfig,
        client: BackendClient,
        tx: mpsc::Sender<SessionEvent>,
    ) -> Self {
        EvaluationSession {
            config,
            client,
            tx,
            pending: None,
            issued: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Feeds one keystroke's worth of input.
    ///
    /// Must be called from within a tokio runtime; the evaluation task is
    /// spawned onto it. Cancelling the previous debounce here guarantees a
    /// superseded keystroke never issues a network call. A request already
    /// in flight is allowed to complete; its result is discarded by the
    /// sequence check.
    pub fn input(&mut self, password: SecretString) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let length = password.expose_secret().chars().count();
        if length < self.config.min_length {
            let tx = self.tx.clone();
            let issued = self.issued.clone();
            tokio::spawn(async move {
                if issued.load(Ordering::SeqCst) == seq {
                    let _ = tx.send(SessionEvent::Cleared).await;
                }
            });
            return;
        }

        let token = CancellationToken::new();
        self.pending = Some(token.clone());

        let debounce = self.config.debounce;
        let check_breaches = self.config.check_breaches;
        let client = self.client.clone();
        let tx = self.tx.clone();
        let issued = self.issued.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => return,
                _ = tokio::time::sleep(debounce) => {}
            }

            // Local scoring always runs; the network lookup is optional.
            let evaluation = evaluate_password_strength(&password);
            let breach = if check_breaches {
                client.check_breach(&password).await
            } else {
                BreachStatus::unchecked()
            };

            if issued.load(Ordering::SeqCst) != seq {
                #[cfg(feature = "tracing")]
                tracing::debug!("discarding stale evaluation (request {})", seq);
                return;
            }

            let result = AnalysisResult::from_parts(evaluation, breach);
            let _ = tx.send(SessionEvent::Settled(result)).await;
        });
    }
}
