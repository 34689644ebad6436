//! Landing page configuration.
//!
//! Values are baked in at compile time from optional `SOLUS_*` environment
//! variables so the static bundle needs no runtime config fetch:
//! - `SOLUS_LAUNCH_AT`: RFC 3339 launch instant (default `2025-12-31T23:59:59Z`)
//! - `SOLUS_SHEETS_URL`: spreadsheet web-app endpoint for waitlist posts
//! - `SOLUS_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, `trace`
//!
//! Unparseable values fall back to the defaults and are reported once.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::LazyLock;
use std::time::Duration;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub const DEFAULT_LAUNCH_AT: &str = "2025-12-31T23:59:59Z";
pub const DEFAULT_SHEETS_URL: &str = "https://script.google.com/macros/s/YOUR_SCRIPT_ID/exec";

pub const THEME_STORAGE_KEY: &str = "solus-theme";
pub const WAITLIST_STORAGE_KEY: &str = "solus-waitlist";
/// Key written by the first version of the page; migrated on startup.
pub const LEGACY_WAITLIST_STORAGE_KEY: &str = "solusWaitlist";
pub const SIGNUP_SOURCE: &str = "solus-foods-landing";

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;
pub const DEFAULT_MESSAGE_TIMEOUT_MS: u64 = 5000;

/// Error produced while parsing a configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid SOLUS_LAUNCH_AT '{0}': expected RFC 3339")]
    InvalidLaunchAt(String),
    #[error("unknown SOLUS_LOG_LEVEL '{0}'")]
    UnknownLogLevel(String),
}

/// Console verbosity for the browser logger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn to_log_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}

/// Typed landing page settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingConfig {
    /// Launch instant in milliseconds since the Unix epoch.
    pub launch_at_ms: i64,
    pub sheets_url: String,
    pub max_retries: u32,
    pub retry_delay: Duration,
    pub message_timeout: Duration,
    pub log_level: LogLevel,
}

static CONFIG: LazyLock<LandingConfig> = LazyLock::new(|| {
    let (config, errors) = LandingConfig::from_values(
        option_env!("SOLUS_LAUNCH_AT"),
        option_env!("SOLUS_SHEETS_URL"),
        option_env!("SOLUS_LOG_LEVEL"),
    );
    for error in errors {
        leptos::logging::warn!("config: {error}; using default");
    }
    config
});

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            launch_at_ms: parse_launch_at(DEFAULT_LAUNCH_AT).unwrap_or_default(),
            sheets_url: DEFAULT_SHEETS_URL.to_owned(),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            message_timeout: Duration::from_millis(DEFAULT_MESSAGE_TIMEOUT_MS),
            log_level: LogLevel::default(),
        }
    }
}

impl LandingConfig {
    /// Process-wide configuration resolved from compile-time variables.
    pub fn get() -> &'static Self {
        &CONFIG
    }

    /// Build a config from raw optional values. Invalid entries keep their
    /// default and are returned alongside so the caller can log them.
    #[must_use]
    pub fn from_values(
        launch_at: Option<&str>,
        sheets_url: Option<&str>,
        log_level: Option<&str>,
    ) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(raw) = launch_at.map(str::trim).filter(|s| !s.is_empty()) {
            match parse_launch_at(raw) {
                Ok(ms) => config.launch_at_ms = ms,
                Err(e) => errors.push(e),
            }
        }
        if let Some(url) = sheets_url.map(str::trim).filter(|s| !s.is_empty()) {
            config.sheets_url = url.to_owned();
        }
        if let Some(raw) = log_level.map(str::trim).filter(|s| !s.is_empty()) {
            match parse_log_level(raw) {
                Ok(level) => config.log_level = level,
                Err(e) => errors.push(e),
            }
        }

        (config, errors)
    }
}

/// Parse an RFC 3339 instant into epoch milliseconds.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidLaunchAt`] when `raw` is not RFC 3339.
pub fn parse_launch_at(raw: &str) -> Result<i64, ConfigError> {
    let parsed = OffsetDateTime::parse(raw, &Rfc3339).map_err(|_| ConfigError::InvalidLaunchAt(raw.to_owned()))?;
    i64::try_from(parsed.unix_timestamp_nanos() / 1_000_000).map_err(|_| ConfigError::InvalidLaunchAt(raw.to_owned()))
}

/// Parse a log level name, case-insensitively.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownLogLevel`] for unrecognized names.
pub fn parse_log_level(raw: &str) -> Result<LogLevel, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "error" => Ok(LogLevel::Error),
        "warn" | "warning" => Ok(LogLevel::Warn),
        "info" => Ok(LogLevel::Info),
        "debug" => Ok(LogLevel::Debug),
        "trace" => Ok(LogLevel::Trace),
        _ => Err(ConfigError::UnknownLogLevel(raw.to_owned())),
    }
}
