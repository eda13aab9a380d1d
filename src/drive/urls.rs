//! Playback and preview URL construction from resolved Drive file ids.

use tracing::trace;

use super::file_id::extract_drive_file_id;

/// Query action the streaming proxy dispatches on.
const PLAYBACK_ACTION: &str = "streamVideo";

/// Template host for embeddable Drive previews.
const PREVIEW_BASE: &str = "https://drive.google.com/file/d";

/// Builds the proxy-routed playback URL for a video.
///
/// Requires both a resolvable Drive file id and a configured Apps Script
/// endpoint; when either is missing the original URL is returned unchanged.
/// The id is appended as a query parameter, using `&` when the endpoint
/// already carries a query string and `?` otherwise.
///
/// # Examples
///
/// ```
/// use signword_core::build_playback_url;
///
/// let url = build_playback_url(
///     "https://drive.google.com/file/d/ABC/view",
///     Some("https://script.google.com/macros/s/KEY/exec"),
/// );
/// assert_eq!(
///     url,
///     "https://script.google.com/macros/s/KEY/exec?action=streamVideo&fileId=ABC"
/// );
/// ```
#[must_use]
pub fn build_playback_url(url: &str, script_url: Option<&str>) -> String {
    let Some(file_id) = extract_drive_file_id(url) else {
        trace!(url = %url, "no file id, playback falls back to source URL");
        return url.to_string();
    };
    let Some(script) = script_url else {
        trace!(url = %url, "no script endpoint configured, playback falls back to source URL");
        return url.to_string();
    };

    let separator = if script.contains('?') { '&' } else { '?' };
    format!(
        "{script}{separator}action={PLAYBACK_ACTION}&fileId={}",
        urlencoding::encode(&file_id)
    )
}

/// Builds the direct embeddable preview URL for a video.
///
/// Resolves the Drive file id and slots it into the fixed preview template;
/// URLs without a resolvable id are returned unchanged.
#[must_use]
pub fn build_preview_url(url: &str) -> String {
    match extract_drive_file_id(url) {
        Some(file_id) => format!("{PREVIEW_BASE}/{file_id}/preview"),
        None => url.to_string(),
    }
}
