// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lyra serve` command implementation.
//!
//! Runs the agent loop until a shutdown signal arrives. The chat
//! transport is an external collaborator behind [`ChannelAdapter`]; this
//! build ships the interactive console channel, so `serve` is the shell
//! session without the banner.

use std::sync::Arc;

use lyra_agent::{shutdown, AgentLoop};
use lyra_config::LyraConfig;
use lyra_core::{ChannelAdapter, LyraError};
use tracing::info;

use crate::shell::ShellChannel;

/// Runs the `lyra serve` command.
pub async fn run_serve(config: LyraConfig) -> Result<(), LyraError> {
    info!(
        agent = config.agent.name.as_str(),
        "no external transport compiled in, serving the console channel"
    );

    let channel: Arc<dyn ChannelAdapter> = Arc::new(ShellChannel::new(&config.agent.name));
    let provider = crate::provider::build_provider(&config)?;

    let mut agent = AgentLoop::new(channel, provider, config);
    let cancel = shutdown::install_signal_handler();
    agent.run(cancel).await?;

    info!("serve stopped");
    Ok(())
}
