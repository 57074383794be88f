//! Runtime configuration.
//!
//! Values come from built-in defaults, then `TICKERDASH_*` environment
//! variables; the CLI applies its global flags on top.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `TICKERDASH_RELAY_URL` | `https://api.allorigins.win/raw` (empty disables the relay) |
//! | `TICKERDASH_PROVIDER_URL` | `https://stooq.com/q/d/l/` |
//! | `TICKERDASH_TIMEOUT_MS` | `10000` |
//! | `TICKERDASH_PREFERENCES` | `<config dir>/tickerdash/preferences.json` |
//! | `TICKERDASH_EARNINGS` | bundled calendar |

use std::path::PathBuf;

use crate::ValidationError;

pub const DEFAULT_RELAY_URL: &str = "https://api.allorigins.win/raw";
pub const DEFAULT_PROVIDER_URL: &str = "https://stooq.com/q/d/l/";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

const ENV_RELAY_URL: &str = "TICKERDASH_RELAY_URL";
const ENV_PROVIDER_URL: &str = "TICKERDASH_PROVIDER_URL";
const ENV_TIMEOUT_MS: &str = "TICKERDASH_TIMEOUT_MS";
const ENV_PREFERENCES: &str = "TICKERDASH_PREFERENCES";
const ENV_EARNINGS: &str = "TICKERDASH_EARNINGS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Relay endpoint wrapping provider URLs; `None` calls the provider directly.
    pub relay_url: Option<String>,
    pub provider_url: String,
    pub timeout_ms: u64,
    pub preferences_path: PathBuf,
    /// Earnings calendar file; `None` uses the bundled calendar.
    pub earnings_path: Option<PathBuf>,
    pub user_agent: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            relay_url: Some(String::from(DEFAULT_RELAY_URL)),
            provider_url: String::from(DEFAULT_PROVIDER_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            preferences_path: default_preferences_path(),
            earnings_path: None,
            user_agent: concat!("tickerdash/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl DashboardConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`, which maps variable names to values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(relay) = lookup(ENV_RELAY_URL) {
            config.relay_url = non_empty(relay);
        }
        if let Some(provider) = lookup(ENV_PROVIDER_URL).and_then(non_empty) {
            config.provider_url = provider;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            config.timeout_ms = parse_timeout(ENV_TIMEOUT_MS, &raw)?;
        }
        if let Some(path) = lookup(ENV_PREFERENCES).and_then(non_empty) {
            config.preferences_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_EARNINGS).and_then(non_empty) {
            config.earnings_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }
}

fn default_preferences_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tickerdash")
        .join("preferences.json")
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

fn parse_timeout(key: &'static str, raw: &str) -> Result<u64, ValidationError> {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ValidationError::InvalidConfig {
            key,
            value: raw.to_owned(),
        }),
    }
}
