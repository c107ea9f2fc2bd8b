// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./lyra.toml` > `~/.config/lyra/lyra.toml` >
//! `/etc/lyra/lyra.toml` with environment variable overrides via `LYRA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::LyraConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/lyra/lyra.toml` (system-wide)
/// 3. `~/.config/lyra/lyra.toml` (user XDG config)
/// 4. `./lyra.toml` (local directory)
/// 5. `LYRA_*` environment variables
pub fn load_config() -> Result<LyraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LyraConfig::default()))
        .merge(Toml::file("/etc/lyra/lyra.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("lyra/lyra.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("lyra.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<LyraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LyraConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<LyraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LyraConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `LYRA_PROVIDER_API_KEY` must map to
/// `provider.api_key`, not `provider.api.key`.
fn env_provider() -> Env {
    Env::prefixed("LYRA_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("provider_", "provider.", 1)
            .replacen("playback_", "playback.", 1)
            .replacen("intent_", "intent.", 1);
        mapped.into()
    })
}
