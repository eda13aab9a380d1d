//! Constants for the fetch module (timeouts).

/// Default HTTP connect timeout (30 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default request timeout (60 seconds; exported tabs are small CSV blobs).
pub const REQUEST_TIMEOUT_SECS: u64 = 60;
