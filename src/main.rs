//! Absurdle terminal client - entry point
//!
//! Connects to a Web Absurdle server and runs the interactive board.

use absurdle_tui::{api::AuthorityClient, game::Controller, interactive::run_tui};
use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "absurdle_tui",
    about = "Terminal client for a Web Absurdle game server",
    version,
    author
)]
struct Cli {
    /// Base URL of the game server
    #[arg(
        short,
        long,
        env = "ABSURDLE_SERVER",
        default_value = "http://127.0.0.1:8000"
    )]
    server: String,

    /// Append tracing output to this file (filtered by RUST_LOG)
    ///
    /// The TUI owns the terminal, so logs never go to stdout/stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    tracing::info!(server = %cli.server, "starting client");
    let api = AuthorityClient::new(&cli.server);
    run_tui(Controller::new(api)).await
}
