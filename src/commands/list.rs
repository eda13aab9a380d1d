//! List command handler: print every catalog entry.

use anyhow::Result;
use signword_core::{CatalogConfig, SheetsClient};

use crate::output;

pub async fn run_list_command(client: &SheetsClient, config: &CatalogConfig) -> Result<()> {
    let catalog = super::load_catalog(client, config).await?;

    if catalog.is_empty() {
        println!("Catalog is empty.");
        return Ok(());
    }

    let width = output::terminal_width();
    for entry in &catalog {
        println!("{}", output::render_entry_row(entry, width));
    }
    println!("{} entries", catalog.len());

    Ok(())
}
