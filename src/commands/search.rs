//! Search command handler: filter the catalog by term, level, and tag.

use anyhow::Result;
use signword_core::{CatalogConfig, SearchFilter, SheetsClient, filter_entries};

use crate::cli::SearchArgs;
use crate::output;

pub async fn run_search_command(
    client: &SheetsClient,
    config: &CatalogConfig,
    args: &SearchArgs,
) -> Result<()> {
    let catalog = super::load_catalog(client, config).await?;

    let filter = SearchFilter {
        term: args.query.clone(),
        level: args.level.clone(),
        tag: args.tag.clone(),
    };
    let matched = filter_entries(&catalog, &filter);

    if matched.is_empty() {
        println!("No entries matched.");
        return Ok(());
    }

    let width = output::terminal_width();
    for entry in &matched {
        println!("{}", output::render_entry_row(entry, width));
    }
    println!("{} of {} entries matched", matched.len(), catalog.len());

    Ok(())
}
