// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Configures tracing-subscriber output format and level filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Seatlink Contributors

//! Structured logging setup built on `tracing`
//!
//! Operators pick the output format with `SEATLINK_LOG_FORMAT` (json for
//! production aggregation, pretty for development, compact otherwise) and
//! the level with `RUST_LOG` or `SEATLINK_LOG_LEVEL`.

use anyhow::Result;
use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    fn from_env() -> Self {
        match env::var("SEATLINK_LOG_FORMAT").as_deref() {
            Ok("json") => Self::Json,
            Ok("compact") => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is unset (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Build logging configuration from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            level: env::var("SEATLINK_LOG_LEVEL").unwrap_or_else(|_| "info".to_owned()),
            format: LogFormat::from_env(),
        }
    }

    /// Install the global tracing subscriber
    ///
    /// `RUST_LOG` takes precedence over the configured level so operators can
    /// raise verbosity per-module without redeploying.
    ///
    /// # Errors
    ///
    /// Returns an error when a subscriber is already installed or the filter
    /// directive fails to parse.
    pub fn init(&self) -> Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .map_err(|e| anyhow::anyhow!("invalid log filter: {e}"))?;

        let registry = tracing_subscriber::registry().with(filter);
        match self.format {
            LogFormat::Json => registry
                .with(fmt::layer().json().with_current_span(true))
                .try_init(),
            LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
            LogFormat::Compact => registry.with(fmt::layer().compact()).try_init(),
        }
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_format_from_env() {
        std::env::set_var("SEATLINK_LOG_FORMAT", "json");
        assert_eq!(LogFormat::from_env(), LogFormat::Json);

        std::env::set_var("SEATLINK_LOG_FORMAT", "compact");
        assert_eq!(LogFormat::from_env(), LogFormat::Compact);

        std::env::remove_var("SEATLINK_LOG_FORMAT");
        assert_eq!(LogFormat::from_env(), LogFormat::Pretty);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
    }
}
