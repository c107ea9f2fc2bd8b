// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as non-zero intervals and well-formed URLs.

use crate::diagnostic::ConfigError;
use crate::model::LyraConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &LyraConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.agent.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "agent.name must not be empty".to_string(),
        });
    }

    let level = config.agent.log_level.as_str();
    if !matches!(level, "trace" | "debug" | "info" | "warn" | "error") {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level must be one of trace/debug/info/warn/error, got `{level}`"
            ),
        });
    }

    if config.playback.tick_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "playback.tick_secs must be at least 1".to_string(),
        });
    }

    if config.provider.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "provider.timeout_secs must be at least 1".to_string(),
        });
    }

    if !config.provider.base_url.starts_with("http://")
        && !config.provider.base_url.starts_with("https://")
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "provider.base_url must be an http(s) URL, got `{}`",
                config.provider.base_url
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
