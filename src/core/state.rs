//! # Request State
//!
//! The observable lifecycle of a single explanation request. This module
//! contains domain state only - no CLI or rendering types.
//!
//! ```text
//! Idle ──explain()──▶ Loading ──▶ Success(explanation)
//!  ▲                     │
//!  │                     └──────▶ Error(message)
//!  └── (initial value; later invocations start over from Loading)
//! ```
//!
//! The state is owned by `RequestController` and published through a
//! `tokio::sync::watch` channel. Collaborators read the current value or
//! subscribe to changes; they never write it directly.

/// Lifecycle of the last (or current) explanation request.
///
/// Exactly one variant is active at a time. Every transition after the
/// initial `Idle` originates from a call to `explain`: the controller
/// publishes `Loading`, then exactly one of `Success`/`Error`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    /// No request has been made yet.
    #[default]
    Idle,
    /// Exactly one request is in flight.
    Loading,
    /// The last request completed; payload is the explanation verbatim.
    Success(String),
    /// The last request failed; payload is pre-formatted for display.
    Error(String),
}

impl RequestState {
    /// True while a request is in flight. Callers gate re-invocation on
    /// this, mirroring a UI disabling its submit control.
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// True once a request has reached `Success` or `Error`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestState::Success(_) | RequestState::Error(_))
    }
}
