// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider adapter trait for LLM completion calls.

use async_trait::async_trait;

use crate::error::LyraError;

/// Adapter for the LLM collaborator.
///
/// Used only on the classifier's no-match fallthrough path: the agent sends
/// the assembled prompt and forwards the completion verbatim.
#[async_trait]
pub trait ProviderAdapter: Send + Sync + 'static {
    /// Returns the human-readable name of this provider.
    fn name(&self) -> &str;

    /// Sends a completion request and returns the full response text.
    async fn complete(&self, prompt: &str) -> Result<String, LyraError>;
}
