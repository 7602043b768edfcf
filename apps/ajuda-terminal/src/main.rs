//! # Ajuda Vizinhança Terminal
//!
//! Line-oriented front-end: renders the post list on stdout and reads
//! commands from stdin.

use std::io::Write;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};

mod commands;
mod config;
mod state;
mod telemetry;
mod view;

use commands::Flow;
use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    tracing::info!(
        data_dir = %config.data_dir.display(),
        storage = ?config.storage,
        persist_mode = %config.persist_mode,
        "Starting Ajuda Vizinhança"
    );

    let mut state = AppState::new(&config).await;

    let mut stdout = std::io::stdout();
    write!(
        stdout,
        "Ajuda Vizinhança\n\n{}\nDigite 'help' para ver os comandos.\n",
        view::render_posts(state.controller.get_all())
    )?;
    stdout.flush()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let command = match commands::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(stdout, "{e}")?;
                continue;
            }
        };

        let reply = commands::execute(&mut state.controller, command).await;
        write!(stdout, "{}", reply.output)?;
        stdout.flush()?;

        if reply.flow == Flow::Quit {
            break;
        }
    }

    tracing::info!(posts = state.controller.get_all().len(), "Shutting down");
    Ok(())
}
