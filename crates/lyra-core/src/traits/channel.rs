// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel adapter trait for messaging platform integrations.

use async_trait::async_trait;

use crate::error::LyraError;
use crate::types::{HealthStatus, InboundMessage, MessageId, OutboundMessage};

/// Adapter for bidirectional messaging channel integrations.
///
/// Channel adapters connect Lyra to a chat transport, handling message
/// ingestion and delivery. The transport owns mention/reply detection: in
/// group chats it forwards only utterances that addressed the bot, while
/// direct chats forward everything.
#[async_trait]
pub trait ChannelAdapter: Send + Sync + 'static {
    /// Returns the human-readable name of this channel.
    fn name(&self) -> &str;

    /// Establishes a connection to the messaging platform.
    async fn connect(&mut self) -> Result<(), LyraError>;

    /// Sends a message through the channel.
    async fn send(&self, msg: OutboundMessage) -> Result<MessageId, LyraError>;

    /// Receives the next inbound message from the channel.
    async fn receive(&self) -> Result<InboundMessage, LyraError>;

    /// Performs a health check and returns the channel's current status.
    async fn health_check(&self) -> Result<HealthStatus, LyraError>;
}
