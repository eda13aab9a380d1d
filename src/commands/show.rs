//! Show command handler: print one entry with its videos.

use anyhow::{Result, bail};
use signword_core::{CatalogConfig, SheetsClient, find_entry};

use crate::cli::ShowArgs;
use crate::output;

pub async fn run_show_command(
    client: &SheetsClient,
    config: &CatalogConfig,
    args: &ShowArgs,
) -> Result<()> {
    let catalog = super::load_catalog(client, config).await?;

    let Some(entry) = find_entry(&catalog, &args.word_id) else {
        bail!("no entry with word id {}", args.word_id);
    };

    let width = output::terminal_width();
    for line in output::render_entry_detail(entry, width) {
        println!("{line}");
    }

    Ok(())
}
