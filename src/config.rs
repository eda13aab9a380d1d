//! Sheet, tab, and proxy endpoint configuration.
//!
//! All pipeline inputs that vary per deployment live here: which spreadsheet
//! to read, the two tab names, and the optional Apps Script endpoint that
//! playback URLs route through. The fetch layer and the joiner both take the
//! config explicitly; nothing in the crate reads process-wide state.

/// Default spreadsheet service host.
pub const DEFAULT_BASE_URL: &str = "https://docs.google.com";

/// Default name of the words tab.
pub const DEFAULT_WORDS_TAB: &str = "words";

/// Default name of the videos tab.
pub const DEFAULT_VIDEOS_TAB: &str = "videos";

/// Where the catalog's data lives and how playback URLs are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Spreadsheet document id
    pub sheet_id: String,
    /// Tab holding word rows
    pub words_tab: String,
    /// Tab holding video rows
    pub videos_tab: String,
    /// Apps Script streaming proxy endpoint; `None` means playback URLs
    /// fall back to source URLs
    pub script_url: Option<String>,
    /// Spreadsheet service host, overridable for tests
    pub base_url: String,
}

impl CatalogConfig {
    /// Creates a configuration for one spreadsheet with default tab names.
    #[must_use]
    pub fn new(sheet_id: impl Into<String>) -> Self {
        Self {
            sheet_id: sheet_id.into(),
            words_tab: DEFAULT_WORDS_TAB.to_string(),
            videos_tab: DEFAULT_VIDEOS_TAB.to_string(),
            script_url: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the words tab name.
    #[must_use]
    pub fn with_words_tab(mut self, tab: impl Into<String>) -> Self {
        self.words_tab = tab.into();
        self
    }

    /// Overrides the videos tab name.
    #[must_use]
    pub fn with_videos_tab(mut self, tab: impl Into<String>) -> Self {
        self.videos_tab = tab.into();
        self
    }

    /// Sets the Apps Script proxy endpoint. An empty string counts as unset.
    #[must_use]
    pub fn with_script_url(mut self, script_url: impl Into<String>) -> Self {
        let script_url = script_url.into();
        self.script_url = (!script_url.is_empty()).then_some(script_url);
        self
    }

    /// Overrides the spreadsheet service host. A trailing slash is trimmed.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// CSV export URL for one tab of the configured spreadsheet.
    ///
    /// Uses the gviz query endpoint, which serves any tab as CSV by name.
    /// The tab name is percent-encoded; the sheet id is used verbatim.
    #[must_use]
    pub fn export_url(&self, tab: &str) -> String {
        format!(
            "{}/spreadsheets/d/{}/gviz/tq?tqx=out:csv&sheet={}",
            self.base_url,
            self.sheet_id,
            urlencoding::encode(tab)
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_config_defaults() {
        let config = CatalogConfig::new("SHEET1");
        assert_eq!(config.sheet_id, "SHEET1");
        assert_eq!(config.words_tab, "words");
        assert_eq!(config.videos_tab, "videos");
        assert_eq!(config.script_url, None);
        assert_eq!(config.base_url, "https://docs.google.com");
    }

    #[test]
    fn test_catalog_config_builder_overrides() {
        let config = CatalogConfig::new("SHEET1")
            .with_words_tab("단어")
            .with_videos_tab("영상")
            .with_script_url("https://script.example/exec");
        assert_eq!(config.words_tab, "단어");
        assert_eq!(config.videos_tab, "영상");
        assert_eq!(config.script_url.as_deref(), Some("https://script.example/exec"));
    }

    #[test]
    fn test_catalog_config_empty_script_url_is_unset() {
        let config = CatalogConfig::new("SHEET1").with_script_url("");
        assert_eq!(config.script_url, None, "blank endpoint should behave like no endpoint");
    }

    #[test]
    fn test_catalog_config_base_url_trailing_slash_trimmed() {
        let config = CatalogConfig::new("SHEET1").with_base_url("http://127.0.0.1:9321/");
        assert_eq!(config.base_url, "http://127.0.0.1:9321");
    }

    #[test]
    fn test_export_url_shape() {
        let config = CatalogConfig::new("SHEET1");
        assert_eq!(
            config.export_url("words"),
            "https://docs.google.com/spreadsheets/d/SHEET1/gviz/tq?tqx=out:csv&sheet=words"
        );
    }

    #[test]
    fn test_export_url_encodes_tab_name() {
        let config = CatalogConfig::new("SHEET1");
        assert_eq!(
            config.export_url("단어"),
            "https://docs.google.com/spreadsheets/d/SHEET1/gviz/tq?tqx=out:csv&sheet=%EB%8B%A8%EC%96%B4"
        );
        assert!(
            config.export_url("my words").ends_with("sheet=my%20words"),
            "spaces in tab names should be percent-encoded"
        );
    }

    #[test]
    fn test_export_url_custom_base() {
        let config = CatalogConfig::new("SHEET1").with_base_url("http://127.0.0.1:9321");
        assert_eq!(
            config.export_url("videos"),
            "http://127.0.0.1:9321/spreadsheets/d/SHEET1/gviz/tq?tqx=out:csv&sheet=videos"
        );
    }
}
