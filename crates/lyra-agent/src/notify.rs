// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bridges queue notifications onto a channel adapter.

use std::sync::Arc;

use async_trait::async_trait;
use lyra_core::{ChannelAdapter, ChatId, LyraError, NotificationSink, OutboundMessage};

/// Delivers queue notifications as plain channel messages.
pub struct ChannelNotifier {
    channel: Arc<dyn ChannelAdapter>,
}

impl ChannelNotifier {
    pub fn new(channel: Arc<dyn ChannelAdapter>) -> Self {
        Self { channel }
    }
}

#[async_trait]
impl NotificationSink for ChannelNotifier {
    async fn notify(&self, chat: &ChatId, text: String) -> Result<(), LyraError> {
        self.channel
            .send(OutboundMessage::text(chat.clone(), text))
            .await?;
        Ok(())
    }
}
