// ABOUTME: Environment-based runtime configuration for the linking service
// ABOUTME: Parses SEATLINK_* variables with validated defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Seatlink Contributors

//! Environment-based configuration management
//!
//! Configuration is environment-only: every knob has a validated default and
//! can be overridden through a `SEATLINK_*` variable, the same way the wider
//! deployment configures its services.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Device type assigned to profiles when the caller supplies none
pub const DEFAULT_DEVICE_TYPE: &str = "TV";

/// Default cap on unique-PIN generation attempts
pub const DEFAULT_PIN_MAX_ATTEMPTS: u32 = 100;

/// Runtime configuration for the linking service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Device type used when a link request omits one
    pub default_device_type: String,
    /// Maximum candidates tried before PIN generation fails
    pub pin_max_attempts: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_device_type: DEFAULT_DEVICE_TYPE.to_owned(),
            pin_max_attempts: DEFAULT_PIN_MAX_ATTEMPTS,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables
    ///
    /// Recognized variables:
    /// - `SEATLINK_DEFAULT_DEVICE_TYPE` (default `TV`)
    /// - `SEATLINK_PIN_MAX_ATTEMPTS` (default `100`, must be positive)
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set but fails to parse or
    /// validate.
    pub fn from_env() -> Result<Self> {
        let default_device_type = env::var("SEATLINK_DEFAULT_DEVICE_TYPE")
            .unwrap_or_else(|_| DEFAULT_DEVICE_TYPE.to_owned());

        let pin_max_attempts = match env::var("SEATLINK_PIN_MAX_ATTEMPTS") {
            Ok(raw) => raw
                .parse::<u32>()
                .context("SEATLINK_PIN_MAX_ATTEMPTS must be a positive integer")?,
            Err(_) => DEFAULT_PIN_MAX_ATTEMPTS,
        };

        let config = Self {
            default_device_type,
            pin_max_attempts,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.pin_max_attempts > 0,
            "SEATLINK_PIN_MAX_ATTEMPTS must be at least 1"
        );
        anyhow::ensure!(
            !self.default_device_type.trim().is_empty(),
            "SEATLINK_DEFAULT_DEVICE_TYPE must not be empty"
        );
        Ok(())
    }
}
