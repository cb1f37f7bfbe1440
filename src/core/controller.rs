//! # Request Controller
//!
//! Turns one user action into exactly one network call and publishes the
//! lifecycle through a `watch` channel:
//!
//! ```text
//! explain(acronym)
//!   │
//!   ├─ endpoint unconfigured ──▶ Error("Configuration Error: ...")
//!   │
//!   └─ Loading ──▶ POST endpoint ──▶ Success(body)
//!                        │
//!                        └─────────▶ Error(classified message)
//! ```
//!
//! Every gated invocation reaches exactly one terminal publish; no code
//! path leaves the state at `Loading`. The controller does not serialize
//! overlapping invocations. Callers gate on `!current_state().is_loading()`,
//! the same way a UI disables its submit control while a request runs.

use log::{debug, warn};
use tokio::sync::watch;

use crate::api::client::{ExplainClient, ExplainError};
use crate::core::config::ResolvedConfig;
use crate::core::state::RequestState;

/// Owns the request lifecycle: state, transport, and failure classification.
///
/// Collaborators observe via [`current_state`](Self::current_state) or
/// [`subscribe`](Self::subscribe); state is never written from outside.
pub struct RequestController {
    config: ResolvedConfig,
    client: ExplainClient,
    state: watch::Sender<RequestState>,
}

impl RequestController {
    /// Builds the controller and its shared transport. The transport is
    /// constructed once here and reused for every call.
    pub fn new(config: ResolvedConfig) -> Result<Self, ExplainError> {
        let client = ExplainClient::new(&config)?;
        let (state, _) = watch::channel(RequestState::Idle);
        Ok(Self {
            config,
            client,
            state,
        })
    }

    /// Snapshot of the current lifecycle state.
    pub fn current_state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    /// Change subscription for observers (the presentation layer).
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Fetches an explanation for `acronym`; the outcome is observed via
    /// the published state, not a return value.
    ///
    /// The acronym is passed through as-is; trimming or upper-casing is
    /// the caller's business. The network round trip is the single await
    /// point, so the invoking task yields there and resumes on completion.
    pub async fn explain(&self, acronym: &str) {
        // Checked on every invocation, not cached at startup, so a runtime
        // config fix is picked up without restarting.
        if !self.config.endpoint_configured() {
            self.publish(RequestState::Error(ExplainError::Config.to_string()));
            return;
        }

        self.publish(RequestState::Loading);

        match self
            .client
            .fetch_explanation(&self.config.endpoint_url, acronym)
            .await
        {
            Ok(explanation) => self.publish(RequestState::Success(explanation)),
            Err(err) => {
                warn!("explain({acronym:?}) failed: {err}");
                self.publish(RequestState::Error(err.to_string()));
            }
        }
    }

    fn publish(&self, next: RequestState) {
        debug!("state -> {next:?}");
        // send_replace stores the value even with no active subscribers.
        self.state.send_replace(next);
    }
}
