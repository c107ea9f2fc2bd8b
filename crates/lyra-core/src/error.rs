// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Lyra chat assistant.

use thiserror::Error;

/// The primary error type used across Lyra adapter traits and core operations.
///
/// The `NoActiveQueue` and `EmptyCollection` variants are user-recoverable:
/// the agent renders them back to the conversation as plain messages rather
/// than treating them as faults.
#[derive(Debug, Error)]
pub enum LyraError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Channel adapter errors (connection failure, message format, delivery failure).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The channel's inbound stream has ended; no further messages will
    /// arrive. Signals orderly agent-loop shutdown, not a fault.
    #[error("channel closed")]
    ChannelClosed,

    /// LLM provider errors (API failure, token limits, model not found).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A queue command was issued for a conversation with no live queue.
    #[error("no active queue for chat {chat}")]
    NoActiveQueue { chat: String },

    /// Playback was requested against a collection with zero items.
    #[error("collection '{name}' has no items")]
    EmptyCollection { name: String },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl LyraError {
    /// Whether this error should be reported back to the requester as a
    /// normal chat message instead of being logged as a fault.
    pub fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            LyraError::NoActiveQueue { .. } | LyraError::EmptyCollection { .. }
        )
    }
}
