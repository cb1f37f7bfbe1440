//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::config::ResolvedConfig;

/// Creates a ResolvedConfig pointing at the given endpoint, with timeouts
/// short enough to keep tests snappy.
pub fn test_config(endpoint_url: &str) -> ResolvedConfig {
    ResolvedConfig {
        endpoint_url: endpoint_url.to_string(),
        connect_timeout_ms: 1_000,
        read_timeout_ms: 500,
        write_timeout_ms: 5_000,
    }
}
