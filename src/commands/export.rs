//! Export command handler: serialize the catalog as JSON.

use anyhow::{Context, Result};
use signword_core::{CatalogConfig, SheetsClient};

use crate::cli::ExportArgs;

pub async fn run_export_command(
    client: &SheetsClient,
    config: &CatalogConfig,
    args: &ExportArgs,
) -> Result<()> {
    let catalog = super::load_catalog(client, config).await?;
    let json = serde_json::to_string_pretty(&catalog).context("failed to serialize catalog")?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &json)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Exported {} entries to {}", catalog.len(), path.display());
        }
        // Bare JSON on stdout so the output can be piped into other tools.
        None => println!("{json}"),
    }

    Ok(())
}
