// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat completion provider for Lyra.
//!
//! Implements [`lyra_core::ProviderAdapter`] over any OpenAI-compatible
//! `/chat/completions` endpoint. Used for free-form conversation, after
//! every structured intent has failed to match.

pub mod client;
pub mod types;

pub use client::OpenAiClient;
pub use types::{ChatMessage, ChatRequest, ChatResponse};
