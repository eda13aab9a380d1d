//! Extraction of the stable file id from Google Drive share links.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// Substring that marks a URL as hosted on Drive.
const DRIVE_DOMAIN: &str = "drive.google.com";

/// Path segment that precedes the file id in path-style share links.
const FILE_PATH_MARKER: &str = "/file/d/";

/// Regex pattern for query-style share links: `?id=<ID>` or `&id=<ID>`.
#[allow(clippy::expect_used)]
static QUERY_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[?&]id=([^&]+)").expect("drive id regex is valid") // Static pattern, safe to panic
});

/// Extracts the Drive file id from a share URL.
///
/// Two link shapes are accepted, tried in order:
///
/// 1. Path-style: `https://drive.google.com/file/d/<ID>/view?usp=sharing`.
///    The id is the path segment after `/file/d/`, terminated by the next
///    `/` or `?` (whichever comes first) or by end-of-string.
/// 2. Query-style: `https://drive.google.com/open?id=<ID>`. The id runs up
///    to the next `&` or end-of-string.
///
/// Returns `None` for URLs that do not mention the Drive domain and for ids
/// that extract to the empty string; callers fall back to the original URL.
///
/// # Examples
///
/// ```
/// use signword_core::extract_drive_file_id;
///
/// let id = extract_drive_file_id("https://drive.google.com/file/d/ABC123/view?usp=sharing");
/// assert_eq!(id.as_deref(), Some("ABC123"));
/// assert_eq!(extract_drive_file_id("https://example.com/video.mp4"), None);
/// ```
#[must_use]
pub fn extract_drive_file_id(url: &str) -> Option<String> {
    if !url.contains(DRIVE_DOMAIN) {
        return None;
    }

    let file_id = if url.contains("drive.google.com/file/d/") {
        let Some(marker_start) = url.find(FILE_PATH_MARKER) else {
            // Degraded fallback kept for sheet compatibility: a path-style
            // link whose marker cannot be located yields the whole URL.
            return Some(url.to_string());
        };
        let after = &url[marker_start + FILE_PATH_MARKER.len()..];
        let end = match (after.find('/'), after.find('?')) {
            (Some(slash), Some(question)) => slash.min(question),
            (Some(slash), None) => slash,
            (None, Some(question)) => question,
            (None, None) => after.len(),
        };
        after[..end].to_string()
    } else {
        QUERY_ID_PATTERN
            .captures(url)
            .and_then(|caps| caps.get(1).map(|m| m.as_str().to_string()))
            .unwrap_or_default()
    };

    if file_id.is_empty() {
        trace!(url = %url, "drive URL without extractable file id");
        return None;
    }

    Some(file_id)
}
