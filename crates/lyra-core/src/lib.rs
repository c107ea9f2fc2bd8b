// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Lyra chat assistant.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common types used throughout the Lyra workspace. The chat transport, the
//! LLM completion call, and the notification sink all plug in through the
//! traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::LyraError;
pub use types::{
    ChatId, ChatKind, HealthStatus, InboundMessage, MessageId, OutboundMessage, UserId, Utterance,
};

// Re-export adapter traits at crate root.
pub use traits::{ChannelAdapter, NotificationSink, ProviderAdapter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lyra_error_has_all_variants() {
        // Verify all 7 error variants exist and can be constructed.
        let _config = LyraError::Config("test".into());
        let _channel = LyraError::Channel {
            message: "test".into(),
            source: None,
        };
        let _provider = LyraError::Provider {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _no_queue = LyraError::NoActiveQueue {
            chat: "chat-1".into(),
        };
        let _empty = LyraError::EmptyCollection {
            name: "chill".into(),
        };
        let _timeout = LyraError::Timeout {
            duration: std::time::Duration::from_secs(30),
        };
        let _internal = LyraError::Internal("test".into());
    }

    #[test]
    fn all_trait_modules_are_exported() {
        // Compile-time check that the adapter traits are accessible through
        // the public API.
        fn _assert_channel_adapter<T: ChannelAdapter>() {}
        fn _assert_provider_adapter<T: ProviderAdapter>() {}
        fn _assert_notification_sink<T: NotificationSink>() {}
    }

    #[test]
    fn chat_and_user_ids() {
        let chat = ChatId("chat-1".into());
        let user = UserId("user-1".into());
        assert_eq!(chat.clone(), chat);
        assert_eq!(user.clone(), user);
        assert_eq!(chat.to_string(), "chat-1");
        assert_eq!(user.to_string(), "user-1");
    }
}
