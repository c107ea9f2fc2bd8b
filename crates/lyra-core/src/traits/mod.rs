// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for the Lyra boundary surfaces.
//!
//! The chat transport, the LLM completion call, and the notification sink
//! are external collaborators; these traits pin their contracts. All traits
//! use `#[async_trait]` for dynamic dispatch compatibility.

pub mod channel;
pub mod notify;
pub mod provider;

pub use channel::ChannelAdapter;
pub use notify::NotificationSink;
pub use provider::ProviderAdapter;
