// SPDX-FileCopyrightText: 2026 Lyra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lyra - a music-aware chat assistant.
//!
//! This is the binary entry point for the Lyra agent.

mod provider;
mod serve;
mod shell;

use clap::{Parser, Subcommand};

/// Lyra - a music-aware chat assistant.
#[derive(Parser, Debug)]
#[command(name = "lyra", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Lyra agent.
    Serve,
    /// Launch an interactive shell session.
    Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match lyra_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            lyra_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Shell) | None => shell::run_shell(config).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber with the configured log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives = [
            "lyra",
            "lyra_core",
            "lyra_config",
            "lyra_intent",
            "lyra_collection",
            "lyra_queue",
            "lyra_provider",
            "lyra_agent",
        ]
        .map(|target| format!("{target}={log_level}"))
        .join(",");
        EnvFilter::new(format!("warn,{directives}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
