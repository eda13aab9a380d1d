//! Error types for the fetch module.
//!
//! Only transport-level failures surface as errors; every anomaly below the
//! transport (ragged rows, blank cells, dangling references) is handled by
//! the pipeline's degrade-per-row policy and never reaches this type.

use thiserror::Error;

/// Errors that can occur while retrieving sheet tabs.
///
/// Every variant names the tab whose fetch failed so the caller can tell the
/// two concurrent retrievals apart.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error fetching tab {tab}: {source}")]
    Network {
        /// The tab whose fetch failed.
        tab: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout fetching tab {tab}")]
    Timeout {
        /// The tab whose fetch timed out.
        tab: String,
    },

    /// HTTP error response (4xx client errors, 5xx server errors).
    ///
    /// The export endpoint answers 4xx for unknown tab names and sheets that
    /// are not shared publicly, so this is the variant users hit first.
    #[error("HTTP {status} fetching tab {tab}")]
    HttpStatus {
        /// The tab whose fetch was rejected.
        tab: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The response arrived but its body could not be read as text.
    #[error("error reading body for tab {tab}: {source}")]
    Body {
        /// The tab whose body read failed.
        tab: String,
        /// The underlying error.
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Creates a network error from a reqwest error.
    pub fn network(tab: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            tab: tab.into(),
            source,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(tab: impl Into<String>) -> Self {
        Self::Timeout { tab: tab.into() }
    }

    /// Creates an HTTP status error.
    pub fn http_status(tab: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            tab: tab.into(),
            status,
        }
    }

    /// Creates a body read error.
    pub fn body(tab: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Body {
            tab: tab.into(),
            source,
        }
    }

    /// The tab this error is about.
    #[must_use]
    pub fn tab(&self) -> &str {
        match self {
            Self::Network { tab, .. }
            | Self::Timeout { tab }
            | Self::HttpStatus { tab, .. }
            | Self::Body { tab, .. } => tab,
        }
    }
}

// No From<reqwest::Error> on purpose: every variant needs the tab name for
// context, which the source error cannot supply. Callers use the helper
// constructors instead.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_timeout_display() {
        let error = FetchError::timeout("words");
        let msg = error.to_string();
        assert!(msg.contains("timeout"), "Expected 'timeout' in: {msg}");
        assert!(msg.contains("words"), "Expected tab name in: {msg}");
    }

    #[test]
    fn test_fetch_error_http_status_display() {
        let error = FetchError::http_status("videos", 404);
        let msg = error.to_string();
        assert!(msg.contains("404"), "Expected '404' in: {msg}");
        assert!(msg.contains("videos"), "Expected tab name in: {msg}");
    }

    #[test]
    fn test_fetch_error_tab_accessor() {
        assert_eq!(FetchError::timeout("words").tab(), "words");
        assert_eq!(FetchError::http_status("videos", 500).tab(), "videos");
    }
}
