// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lyra shell` command implementation.
//!
//! Launches an interactive session with a colored prompt and readline
//! history. Input lines are fed to the agent loop as direct-chat
//! messages through an in-process channel adapter, so the full
//! classify/dispatch path (and live playback queues) runs exactly as it
//! would behind a real transport.

use std::sync::Arc;

use async_trait::async_trait;
use colored::Colorize;
use lyra_agent::{shutdown, AgentLoop};
use lyra_config::LyraConfig;
use lyra_core::{
    ChannelAdapter, ChatId, ChatKind, HealthStatus, InboundMessage, LyraError, MessageId,
    OutboundMessage, UserId,
};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tokio::sync::{mpsc, Mutex};
use tracing::debug;

/// Channel adapter over interactive stdin.
///
/// A dedicated thread owns the readline loop and forwards lines into an
/// async queue; dropping the sender (on `/quit`, Ctrl+C, or Ctrl+D)
/// closes the channel, which the agent loop treats as shutdown.
pub struct ShellChannel {
    agent_name: String,
    rx: Mutex<mpsc::Receiver<InboundMessage>>,
}

impl ShellChannel {
    pub fn new(agent_name: &str) -> Self {
        let (tx, rx) = mpsc::channel(16);
        spawn_readline_thread(agent_name.to_string(), tx);
        Self {
            agent_name: agent_name.to_string(),
            rx: Mutex::new(rx),
        }
    }
}

#[async_trait]
impl ChannelAdapter for ShellChannel {
    fn name(&self) -> &str {
        "shell"
    }

    async fn connect(&mut self) -> Result<(), LyraError> {
        Ok(())
    }

    async fn send(&self, msg: OutboundMessage) -> Result<MessageId, LyraError> {
        println!(
            "{} {}",
            format!("{}:", self.agent_name).cyan().bold(),
            msg.text
        );
        Ok(MessageId(uuid::Uuid::new_v4().to_string()))
    }

    async fn receive(&self) -> Result<InboundMessage, LyraError> {
        let mut rx = self.rx.lock().await;
        rx.recv().await.ok_or(LyraError::ChannelClosed)
    }

    async fn health_check(&self) -> Result<HealthStatus, LyraError> {
        Ok(HealthStatus::Healthy)
    }
}

fn spawn_readline_thread(agent_name: String, tx: mpsc::Sender<InboundMessage>) {
    std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("{}: failed to initialize readline: {e}", "error".red());
                return;
            }
        };

        let prompt = format!("{}> ", agent_name.green());
        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    if trimmed == "/quit" || trimmed == "/exit" {
                        break;
                    }
                    let _ = rl.add_history_entry(&line);

                    let msg = InboundMessage {
                        id: uuid::Uuid::new_v4().to_string(),
                        text: trimmed.to_string(),
                        sender: UserId("local".into()),
                        sender_name: "friend".into(),
                        chat: ChatId("shell".into()),
                        chat_kind: ChatKind::Direct,
                        addressed: true,
                        timestamp: chrono::Utc::now().to_rfc3339(),
                    };
                    if tx.blocking_send(msg).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    break;
                }
                Err(e) => {
                    eprintln!("{}: {e}", "error".red());
                    break;
                }
            }
        }
        debug!("readline thread exiting");
        // Dropping tx closes the channel and ends the agent loop.
    });
}

/// Runs the `lyra shell` interactive session.
pub async fn run_shell(config: LyraConfig) -> Result<(), LyraError> {
    let channel: Arc<dyn ChannelAdapter> = Arc::new(ShellChannel::new(&config.agent.name));
    let provider = crate::provider::build_provider(&config)?;

    println!("{}", format!("{} shell", config.agent.name).bold().green());
    println!("Type {} to exit.\n", "/quit".yellow());

    let mut agent = AgentLoop::new(channel, provider, config);
    let cancel = shutdown::install_signal_handler();
    agent.run(cancel).await?;

    println!("{}", "goodbye".dimmed());
    Ok(())
}
