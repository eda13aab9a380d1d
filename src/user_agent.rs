//! Shared User-Agent string for sheet fetch requests.
//!
//! Single source for project URL and UA format so sheet traffic identifies
//! the tool consistently (good citizenship; RFC 9308).

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/hyeonsign/signword";

/// Default User-Agent for sheet fetch requests (identifies the tool).
#[must_use]
pub(crate) fn default_sheets_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("signword/{version} (vocabulary-catalog; +{PROJECT_UA_URL})")
}
