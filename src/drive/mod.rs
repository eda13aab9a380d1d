//! Drive URL handling: file id extraction and playback/preview rewriting.
//!
//! Video cells in the sheet usually hold a Google Drive share link in one of
//! two shapes (`/file/d/<id>/...` or `?id=<id>`). The id is the stable token
//! both derived URLs are built from; URLs that do not resolve to an id fall
//! back to the original link unchanged.

mod file_id;
mod urls;

pub use file_id::extract_drive_file_id;
pub use urls::{build_playback_url, build_preview_url};
