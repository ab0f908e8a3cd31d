//! Audit submission state.
//!
//! An [`AuditSession`] owns three observable cells: `loading`, `error` and
//! `result`. They live in one `watch` channel so every update is atomic and
//! views can subscribe to changes.
//!
//! ```text
//! Idle ── analyze_reports ──▶ Loading ──▶ Success | Failed
//!   ▲                                          │
//!   └───────────────── reset ◀─────────────────┘
//! ```
//!
//! Each submission takes a request token. Only the latest token may commit
//! its outcome; a response arriving after a newer submission or a `reset` is
//! discarded.

use std::sync::atomic::{AtomicU64, Ordering};

use laudo_core::{AuditRequest, AuditResult};
use tokio::sync::watch;

use crate::{AuditClient, AuditTransport, error::AuditError};

/// Snapshot of a session's observable state.
///
/// After a submission settles exactly one of `error` and `result` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditState {
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<AuditResult>,
}

impl AuditState {
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        !self.loading && self.error.is_none() && self.result.is_none()
    }
}

/// How one call to [`AuditSession::analyze_reports`] ended.
#[derive(Debug)]
pub enum Submission {
    /// The result was committed to the session.
    Completed(AuditResult),
    /// The failure was committed to the session's `error` cell.
    Failed(AuditError),
    /// A newer submission or a reset replaced this one; nothing was committed.
    Superseded,
}

/// Audit submission client with observable state.
pub struct AuditSession<T = AuditClient> {
    transport: T,
    state: watch::Sender<AuditState>,
    latest: AtomicU64,
}

impl<T: AuditTransport> AuditSession<T> {
    /// Create an idle session over `transport`.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: watch::Sender::new(AuditState::default()),
            latest: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Submit two reports and record the outcome in the session.
    ///
    /// Clears `error` and `result` and raises `loading` before dispatching.
    /// Failures are stored in the `error` cell as a display string and are
    /// also returned, never raised. `loading` drops back to `false` when this
    /// call ends, including when the future is dropped mid-flight, unless a
    /// newer submission has taken over.
    pub async fn analyze_reports(&self, request: &AuditRequest) -> Submission {
        let mut token = 0;
        self.state.send_modify(|state| {
            token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            state.loading = true;
            state.error = None;
            state.result = None;
        });
        let _loading = LoadingGuard {
            state: &self.state,
            latest: &self.latest,
            token,
        };

        tracing::debug!(token, "audit submission dispatched");
        let outcome = self.transport.submit_audit(request).await;

        let committed = self.state.send_if_modified(|state| {
            if self.latest.load(Ordering::SeqCst) != token {
                return false;
            }
            state.loading = false;
            match &outcome {
                Ok(result) => state.result = Some(result.clone()),
                Err(error) => state.error = Some(error.user_message()),
            }
            true
        });

        if !committed {
            tracing::debug!(token, "discarding stale audit response");
            return Submission::Superseded;
        }

        match outcome {
            Ok(result) => {
                tracing::debug!(
                    token,
                    classification = %result.classification,
                    discrepancies = result.discrepancies.len(),
                    "audit completed"
                );
                Submission::Completed(result)
            }
            Err(error) => {
                tracing::warn!(token, %error, "audit submission failed");
                Submission::Failed(error)
            }
        }
    }
}

impl<T> AuditSession<T> {
    /// Return to idle: `(loading = false, error = None, result = None)`.
    ///
    /// An in-flight submission keeps running, but its response is discarded.
    pub fn reset(&self) {
        self.state.send_modify(|state| {
            self.latest.fetch_add(1, Ordering::SeqCst);
            *state = AuditState::default();
        });
    }

    #[must_use]
    pub fn snapshot(&self) -> AuditState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    #[must_use]
    pub fn result(&self) -> Option<AuditResult> {
        self.state.borrow().result.clone()
    }

    /// Watch state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuditState> {
        self.state.subscribe()
    }
}

/// Lowers `loading` when a submission is dropped before it commits, as long
/// as the submission is still the latest one. A committed outcome has
/// already lowered it in the same update.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<AuditState>,
    latest: &'a AtomicU64,
    token: u64,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_if_modified(|state| {
            if self.latest.load(Ordering::SeqCst) != self.token || !state.loading {
                return false;
            }
            state.loading = false;
            true
        });
    }
}
