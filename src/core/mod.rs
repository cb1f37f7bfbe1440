//! # Core Request Lifecycle
//!
//! This module contains akro's business logic. It knows nothing about any
//! specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • RequestState (enum)  │
//!                    │  • RequestController    │
//!                    │  • Configuration        │
//!                    │                         │
//!                    │  Owns the lifecycle.    │
//!                    └───────────┬─────────────┘
//!                                │ read state / call explain()
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    CLI     │      │    TUI     │      │    GUI     │
//!     │ (main.rs)  │      │  (future)  │      │  (future)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: the closed set of lifecycle values
//! - [`controller`]: the one component that writes state
//! - [`config`]: endpoint + timeout policy with override hierarchy

pub mod config;
pub mod controller;
pub mod state;
