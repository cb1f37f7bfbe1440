//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.akro/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The endpoint URL ships as a placeholder sentinel; until it is replaced
//! with a real deployment URL, every request short-circuits into a
//! configuration error. The controller re-checks this on every call, so a
//! fixed config is picked up without touching the controller.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AkroConfig {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub transport: TransportConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EndpointConfig {
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TransportConfig {
    pub connect_timeout_ms: Option<u64>,
    pub read_timeout_ms: Option<u64>,
    pub write_timeout_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Sentinel shipped in place of a real deployment URL. An endpoint equal to
/// this (or blank) is treated as unconfigured.
pub const PLACEHOLDER_ENDPOINT_URL: &str = "YOUR_EXPLANATION_ENDPOINT_URL_HERE";

pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_WRITE_TIMEOUT_MS: u64 = 60_000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint_url: String,
    pub connect_timeout_ms: u64,
    pub read_timeout_ms: u64,
    pub write_timeout_ms: u64,
}

impl ResolvedConfig {
    /// Whether the endpoint URL has been replaced with a real value.
    /// Checked on every request, not cached at startup.
    pub fn endpoint_configured(&self) -> bool {
        let url = self.endpoint_url.trim();
        !url.is_empty() && url != PLACEHOLDER_ENDPOINT_URL
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.akro/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".akro").join("config.toml"))
}

/// Load config from `~/.akro/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AkroConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AkroConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AkroConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(AkroConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: AkroConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# akro Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [endpoint]
# url = "https://example.com/get_ai_explanation"   # Or set AKRO_ENDPOINT_URL

# [transport]
# connect_timeout_ms = 60000
# read_timeout_ms = 60000
# write_timeout_ms = 60000
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_endpoint` is from the `--endpoint` flag (None = not specified).
pub fn resolve(config: &AkroConfig, cli_endpoint: Option<&str>) -> ResolvedConfig {
    // Endpoint: CLI → env → config → placeholder sentinel
    let endpoint_url = cli_endpoint
        .map(|s| s.to_string())
        .or_else(|| std::env::var("AKRO_ENDPOINT_URL").ok())
        .or_else(|| config.endpoint.url.clone())
        .unwrap_or_else(|| PLACEHOLDER_ENDPOINT_URL.to_string());

    ResolvedConfig {
        endpoint_url,
        connect_timeout_ms: config
            .transport
            .connect_timeout_ms
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_MS),
        read_timeout_ms: config
            .transport
            .read_timeout_ms
            .unwrap_or(DEFAULT_READ_TIMEOUT_MS),
        write_timeout_ms: config
            .transport
            .write_timeout_ms
            .unwrap_or(DEFAULT_WRITE_TIMEOUT_MS),
    }
}
