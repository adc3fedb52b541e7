//! Process configuration.
//!
//! Everything comes from the environment with documented defaults, so the
//! binary runs with no configuration at all in development. Set-but-invalid
//! values are a startup error rather than a silent fallback.

use std::time::Duration;

use tracing::info;

/// Listen port used when `PORT` is unset.
const DEFAULT_PORT: u16 = 4747;

/// Refresh period in seconds used when `REFRESH_PERIOD_SECS` is unset.
const DEFAULT_REFRESH_PERIOD_SECS: u64 = 60;

/// Per-attempt refresh timeout in seconds used when `REFRESH_TIMEOUT_SECS`
/// is unset.
const DEFAULT_REFRESH_TIMEOUT_SECS: u64 = 30;

/// Static assets directory used when `STATIC_DIR` is unset.
const DEFAULT_STATIC_DIR: &str = "./static";

/// Error returned for an invalid configuration value. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {name}: {value:?} ({reason})")]
pub struct ConfigError {
    name: &'static str,
    value: String,
    reason: &'static str,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port the HTTP listener binds.
    pub port: u16,

    /// Interval between scheduled refreshes.
    pub refresh_period: Duration,

    /// Budget for a single refresh attempt.
    pub refresh_timeout: Duration,

    /// Capacity feed base URL override, if any.
    pub feed_url: Option<String>,

    /// Directory served for non-API paths.
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            refresh_period: Duration::from_secs(DEFAULT_REFRESH_PERIOD_SECS),
            refresh_timeout: Duration::from_secs(DEFAULT_REFRESH_TIMEOUT_SECS),
            feed_url: None,
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Split out from [`from_env`] so tests can drive it without mutating
    /// process-wide environment state.
    ///
    /// [`from_env`]: ServerConfig::from_env
    pub fn from_lookup(
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match lookup("PORT") {
            Some(value) => {
                config.port = value.trim().parse().map_err(|_| ConfigError {
                    name: "PORT",
                    value,
                    reason: "must be a TCP port number",
                })?;
            }
            None => info!("no PORT environment variable detected, defaulting to {DEFAULT_PORT}"),
        }

        if let Some(secs) = parse_secs(&lookup, "REFRESH_PERIOD_SECS")? {
            config.refresh_period = secs;
        }

        if let Some(secs) = parse_secs(&lookup, "REFRESH_TIMEOUT_SECS")? {
            config.refresh_timeout = secs;
        }

        config.feed_url = lookup("CAPACITY_FEED_URL").filter(|url| !url.is_empty());

        if let Some(dir) = lookup("STATIC_DIR").filter(|dir| !dir.is_empty()) {
            config.static_dir = dir;
        }

        Ok(config)
    }
}

/// Parse an optional seconds value; zero is rejected.
fn parse_secs(
    lookup: &impl Fn(&'static str) -> Option<String>,
    name: &'static str,
) -> Result<Option<Duration>, ConfigError> {
    let Some(value) = lookup(name) else {
        return Ok(None);
    };

    let secs: u64 = value.trim().parse().map_err(|_| ConfigError {
        name,
        value: value.clone(),
        reason: "must be a whole number of seconds",
    })?;

    if secs == 0 {
        return Err(ConfigError {
            name,
            value,
            reason: "must be greater than zero",
        });
    }

    Ok(Some(Duration::from_secs(secs)))
}
