//! Tracing/logging initialization.
//!
//! Filtering follows `RUST_LOG` (default `info`). Output goes to stderr so
//! that stdout stays reserved for program output.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const ENV_LOG_FORMAT: &str = "STOCKROOM_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogConfigError {
    #[error("STOCKROOM_LOG_FORMAT: expected `text` or `json`, got `{0}`")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = LogConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(LogConfigError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub format: LogFormat,
}

impl LogConfig {
    pub fn from_env() -> Result<Self, LogConfigError> {
        match std::env::var(ENV_LOG_FORMAT) {
            Ok(raw) => Ok(Self {
                format: raw.parse()?,
            }),
            Err(_) => Ok(Self::default()),
        }
    }
}

/// Install the global subscriber.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Text => builder.compact().try_init(),
    };
}
