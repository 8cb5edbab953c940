//! folio CLI - ask the portfolio chatbot from a terminal
//!
//! # Commands
//!
//! ```bash
//! # One question, one reply
//! folio ask what projects have you built
//!
//! # Reply as the JSON the web front end consumes, with routing details
//! folio ask --json --explain "show me your projects"
//!
//! # Interactive session
//! folio chat
//!
//! # List intents and validate a knowledge file
//! folio intents
//! folio validate data/portfolio-knowledge.json
//! ```

mod cli;
mod commands;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use folio_core::config::CliOverrides;
use folio_core::FolioConfig;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        knowledge_path: cli.knowledge.clone(),
        provider: cli.provider.clone(),
        threshold: cli.threshold,
        log_level: cli.verbose.then(|| "debug".to_string()),
    };
    let config = FolioConfig::load(cli.config.as_deref(), Some(&overrides))
        .context("failed to load configuration")?;

    logging::init_tracing(&config.observability);

    match cli.command {
        Commands::Ask {
            text,
            json,
            explain,
        } => commands::ask::run(&config, &text.join(" "), json, explain).await,
        Commands::Chat => commands::chat::run(&config).await,
        Commands::Intents { json } => commands::intents::run(&config, json),
        Commands::Validate { path } => commands::validate::run(&config, path.as_deref()),
    }
}
