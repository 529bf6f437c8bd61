//! Process configuration from the environment

use chrono_tz::Tz;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Australia::Sydney;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TRAVEL_BOT_PORT is not a valid port: {0:?}")]
    InvalidPort(String),
    #[error("TRAVEL_BOT_TIMEZONE is not a known IANA timezone: {0:?}")]
    InvalidTimezone(String),
}

/// Configuration for the hook server
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub port: u16,
    /// Timezone whose calendar day date rules are evaluated against
    pub timezone: Tz,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            timezone: DEFAULT_TIMEZONE,
        }
    }
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("TRAVEL_BOT_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let timezone = match lookup("TRAVEL_BOT_TIMEZONE") {
            Some(raw) => raw
                .trim()
                .parse::<Tz>()
                .map_err(|_| ConfigError::InvalidTimezone(raw.clone()))?,
            None => DEFAULT_TIMEZONE,
        };

        Ok(Self { port, timezone })
    }
}
