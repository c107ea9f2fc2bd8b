// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across adapter traits and the Lyra framework.

use serde::{Deserialize, Serialize};

/// Unique identifier for a conversation (direct chat or group).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatId(pub String);

impl std::fmt::Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a conversation participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a delivered message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

/// Kind of conversation the message arrived in.
///
/// Direct chats forward every utterance to the agent; in group chats the
/// transport forwards only utterances that addressed the bot (mention or
/// reply), plus recognized commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatKind {
    Direct,
    Group,
}

impl std::fmt::Display for ChatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatKind::Direct => write!(f, "direct"),
            ChatKind::Group => write!(f, "group"),
        }
    }
}

/// A single free-text utterance ready for intent classification.
///
/// Consumed synchronously by the classifier; not retained afterwards.
#[derive(Debug, Clone)]
pub struct Utterance {
    pub text: String,
    pub sender: UserId,
    pub chat: ChatId,
    pub chat_kind: ChatKind,
}

/// An inbound message received from a channel adapter.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub id: String,
    pub text: String,
    pub sender: UserId,
    /// Display name of the sender, used in replies.
    pub sender_name: String,
    pub chat: ChatId,
    pub chat_kind: ChatKind,
    /// Whether the bot was mentioned or replied to. Always true for direct
    /// chats; the transport sets it for groups.
    pub addressed: bool,
    pub timestamp: String,
}

impl InboundMessage {
    /// Borrow this message as a classifier-ready utterance.
    pub fn utterance(&self) -> Utterance {
        Utterance {
            text: self.text.clone(),
            sender: self.sender.clone(),
            chat: self.chat.clone(),
            chat_kind: self.chat_kind,
        }
    }
}

/// An outbound message to be sent via a channel adapter.
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    pub chat: ChatId,
    pub text: String,
    pub reply_to: Option<MessageId>,
}

impl OutboundMessage {
    /// Plain text message to a chat, not replying to anything.
    pub fn text(chat: ChatId, text: impl Into<String>) -> Self {
        Self {
            chat,
            text: text.into(),
            reply_to: None,
        }
    }
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}
