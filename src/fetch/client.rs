//! HTTP client for the spreadsheet CSV export endpoint.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};

use crate::catalog::{CatalogEntry, build_catalog_from_csv};
use crate::config::CatalogConfig;
use crate::user_agent;

use super::constants::{CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS};
use super::error::FetchError;

/// HTTP client for fetching sheet tabs as CSV.
///
/// Designed to be created once and reused; both tab fetches of a catalog
/// build share its connection pool.
///
/// # Example
///
/// ```no_run
/// use signword_core::{CatalogConfig, SheetsClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SheetsClient::new();
/// let config = CatalogConfig::new("1AbCsheetId");
/// let catalog = client.fetch_catalog(&config).await?;
/// println!("{} entries", catalog.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: Client,
}

impl Default for SheetsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetsClient {
    /// Creates a client with default timeouts.
    ///
    /// Default configuration:
    /// - Connect timeout: 30 seconds
    /// - Request timeout: 60 seconds
    /// - Gzip decompression: enabled
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeouts(CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS)
    }

    /// Creates a client with explicit timeout values.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// timeout configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_timeouts(connect_timeout_secs: u64, request_timeout_secs: u64) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .timeout(Duration::from_secs(request_timeout_secs))
            .gzip(true)
            .user_agent(user_agent::default_sheets_user_agent())
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self { client }
    }

    /// Fetches one tab of the configured spreadsheet as raw CSV text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the request fails, times out, is answered
    /// with a non-success status, or the body cannot be read.
    #[instrument(skip(self, config), fields(sheet_id = %config.sheet_id))]
    pub async fn fetch_tab(&self, config: &CatalogConfig, tab: &str) -> Result<String, FetchError> {
        let url = config.export_url(tab);
        debug!(url = %url, "fetching sheet tab");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::timeout(tab)
            } else {
                FetchError::network(tab, e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(tab, status.as_u16()));
        }

        let body = response.text().await.map_err(|e| FetchError::body(tab, e))?;
        debug!(bytes = body.len(), "fetched sheet tab");
        Ok(body)
    }

    /// Fetches both tabs concurrently and builds the catalog.
    ///
    /// The two tab requests run under `tokio::try_join!`; a failure in either
    /// aborts the combination before any parsing work happens. On success the
    /// pure pipeline joins the tabs into the sorted entry collection.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] of whichever tab fetch failed.
    #[instrument(skip(self, config), fields(sheet_id = %config.sheet_id))]
    pub async fn fetch_catalog(
        &self,
        config: &CatalogConfig,
    ) -> Result<Vec<CatalogEntry>, FetchError> {
        let (words_csv, videos_csv) = tokio::try_join!(
            self.fetch_tab(config, &config.words_tab),
            self.fetch_tab(config, &config.videos_tab),
        )?;
        Ok(build_catalog_from_csv(
            &words_csv,
            &videos_csv,
            config.script_url.as_deref(),
        ))
    }
}
