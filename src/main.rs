//! CLI entry point for the signword tool.

use anyhow::{Context, Result, bail};
use clap::Parser;
use signword_core::{CatalogConfig, SheetsClient};
use tracing::debug;
use url::Url;

mod cli;
mod commands;
mod output;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let cli = Cli::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // Logs go to stderr; stdout carries only command output so it stays pipeable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    debug!(?cli, "CLI arguments parsed");

    let config = build_config(&cli)?;
    let client = SheetsClient::new();

    match &cli.command {
        Command::List => commands::run_list_command(&client, &config).await,
        Command::Search(args) => commands::run_search_command(&client, &config, args).await,
        Command::Show(args) => commands::run_show_command(&client, &config, args).await,
        Command::Export(args) => commands::run_export_command(&client, &config, args).await,
    }
}

/// Builds the pipeline configuration from CLI flags.
///
/// URLs are validated here but carried as the exact strings given; the
/// playback separator logic depends on the script URL staying verbatim.
fn build_config(cli: &Cli) -> Result<CatalogConfig> {
    let Some(sheet_id) = cli.sheet_id.as_deref() else {
        bail!("no spreadsheet configured: pass --sheet <ID> or set SIGNWORD_SHEET_ID");
    };

    Url::parse(&cli.base_url)
        .with_context(|| format!("invalid base URL: {}", cli.base_url))?;
    if let Some(script_url) = cli.script_url.as_deref().filter(|value| !value.is_empty()) {
        Url::parse(script_url).with_context(|| format!("invalid script URL: {script_url}"))?;
    }

    let mut config = CatalogConfig::new(sheet_id)
        .with_words_tab(&cli.words_tab)
        .with_videos_tab(&cli.videos_tab)
        .with_base_url(&cli.base_url);
    if let Some(script_url) = &cli.script_url {
        config = config.with_script_url(script_url);
    }
    Ok(config)
}
