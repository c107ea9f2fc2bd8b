// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification sink trait for playback and queue events.

use async_trait::async_trait;

use crate::error::LyraError;
use crate::types::ChatId;

/// Sink for plain-text notifications emitted outside the request/response
/// flow (now-playing ticks, completion, stop summaries).
///
/// The playback scheduler holds a sink rather than a full channel adapter:
/// only the triggering conditions and data fields are part of the core
/// contract, the exact wording is presentation.
#[async_trait]
pub trait NotificationSink: Send + Sync + 'static {
    /// Delivers a notification to the given conversation.
    async fn notify(&self, chat: &ChatId, text: String) -> Result<(), LyraError>;
}
