// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Lyra chat assistant.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Lyra configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LyraConfig {
    /// Agent identity and behavior settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// LLM provider settings (OpenAI-compatible chat completions API).
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Playback queue settings.
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Intent classification settings.
    #[serde(default)]
    pub intent: IntentConfig,
}

/// Agent identity and behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "lyra".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// LLM provider configuration.
///
/// Lyra speaks the OpenAI chat-completions wire format, so any compatible
/// endpoint works by overriding `base_url`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// API key. `None` requires the environment variable override.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the chat-completions API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier sent with each request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Playback queue configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PlaybackConfig {
    /// Simulated per-item dwell time in seconds between auto-advances.
    #[serde(default = "default_tick_secs")]
    pub tick_secs: u64,

    /// How many upcoming items a queue status report lists.
    #[serde(default = "default_upcoming_preview")]
    pub upcoming_preview: usize,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_secs: default_tick_secs(),
            upcoming_preview: default_upcoming_preview(),
        }
    }
}

fn default_tick_secs() -> u64 {
    10
}

fn default_upcoming_preview() -> usize {
    3
}

/// Intent classification configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IntentConfig {
    /// Minimum length of a tokenized item name; shorter tokens are dropped.
    #[serde(default = "default_min_item_len")]
    pub min_item_len: usize,
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            min_item_len: default_min_item_len(),
        }
    }
}

fn default_min_item_len() -> usize {
    3
}
