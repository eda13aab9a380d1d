//! CLI command handlers.

mod export;
mod list;
mod search;
mod show;

pub use export::run_export_command;
pub use list::run_list_command;
pub use search::run_search_command;
pub use show::run_show_command;

use anyhow::{Context, Result};
use signword_core::{CatalogConfig, CatalogEntry, SheetsClient};

/// Fetches both tabs and builds the catalog, with a command-friendly error.
async fn load_catalog(client: &SheetsClient, config: &CatalogConfig) -> Result<Vec<CatalogEntry>> {
    client
        .fetch_catalog(config)
        .await
        .with_context(|| format!("failed to load catalog from sheet {}", config.sheet_id))
}
