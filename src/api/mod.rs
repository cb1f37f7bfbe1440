//! HTTP boundary: wire types and the shared transport.

pub mod client;
pub mod types;

pub use client::{ExplainClient, ExplainError};
pub use types::ExplainRequest;
