//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use signword_core::config::DEFAULT_BASE_URL;

/// Search a sign-language vocabulary catalog kept in Google Sheets.
///
/// signword fetches the words and videos tabs of a hand-edited spreadsheet,
/// joins them into one catalog, and lists, searches, or exports the result.
#[derive(Parser, Debug)]
#[command(name = "signword")]
#[command(author, version, about)]
pub struct Cli {
    /// Spreadsheet document id to read
    #[arg(long = "sheet", env = "SIGNWORD_SHEET_ID", value_name = "ID", global = true)]
    pub sheet_id: Option<String>,

    /// Name of the words tab
    #[arg(long, value_name = "NAME", default_value = "words", global = true)]
    pub words_tab: String,

    /// Name of the videos tab
    #[arg(long, value_name = "NAME", default_value = "videos", global = true)]
    pub videos_tab: String,

    /// Apps Script endpoint that proxies video streaming
    #[arg(long, env = "SIGNWORD_SCRIPT_URL", value_name = "URL", global = true)]
    pub script_url: Option<String>,

    /// Spreadsheet service base URL
    #[arg(
        long,
        env = "SIGNWORD_BASE_URL",
        value_name = "URL",
        default_value = DEFAULT_BASE_URL,
        global = true
    )]
    pub base_url: String,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every entry in the catalog
    List,
    /// Search entries by term, level, and tag
    Search(SearchArgs),
    /// Show one entry with its videos
    Show(ShowArgs),
    /// Export the full catalog as JSON
    Export(ExportArgs),
}

/// Arguments for `signword search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Term matched against word, meaning, tags, and notes; omit to match all
    pub query: Option<String>,

    /// Keep only entries with this exact level label
    #[arg(long, value_name = "LEVEL")]
    pub level: Option<String>,

    /// Keep only entries carrying this tag
    #[arg(long, value_name = "TAG")]
    pub tag: Option<String>,
}

/// Arguments for `signword show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Word id of the entry to show
    pub word_id: String,
}

/// Arguments for `signword export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Write JSON to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
