// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider selection for the binary.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lyra_config::LyraConfig;
use lyra_core::{LyraError, ProviderAdapter};
use lyra_provider::OpenAiClient;
use tracing::{info, warn};

/// Builds the completion provider from configuration.
///
/// Without an API key, structured features (collections, playback,
/// choices) still work; free-form conversation gets a fixed reply.
pub fn build_provider(config: &LyraConfig) -> Result<Arc<dyn ProviderAdapter>, LyraError> {
    match config.provider.api_key.as_deref() {
        Some(key) if !key.is_empty() => {
            let client = OpenAiClient::new(
                key,
                &config.provider.base_url,
                config.provider.model.clone(),
                Duration::from_secs(config.provider.timeout_secs),
            )?;
            info!(
                model = config.provider.model.as_str(),
                base_url = config.provider.base_url.as_str(),
                "chat completion provider configured"
            );
            Ok(Arc::new(client))
        }
        _ => {
            warn!("no provider API key configured, free-form replies are disabled");
            Ok(Arc::new(OfflineProvider))
        }
    }
}

/// Stand-in provider used when no API key is configured.
struct OfflineProvider;

#[async_trait]
impl ProviderAdapter for OfflineProvider {
    fn name(&self) -> &str {
        "offline"
    }

    async fn complete(&self, _prompt: &str) -> Result<String, LyraError> {
        Ok(
            "i can't chat freely right now (no provider API key configured), \
             but playlists and playback still work!"
                .to_string(),
        )
    }
}
