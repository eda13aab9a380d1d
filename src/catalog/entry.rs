//! The joined catalog model exposed to consumers.

use serde::Serialize;

use super::record::VideoKind;

/// One video attached to a catalog entry, with both derived URLs.
///
/// Serializes with camelCase keys; absent optionals are omitted entirely so
/// exported JSON matches the shape the web consumers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogVideo {
    /// Stable UI key: the declared video id, or the source URL when blank
    pub id: String,
    /// Which sub-collection this video belongs to
    pub kind: VideoKind,
    /// Parent word id as declared on the row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_id: Option<String>,
    /// Full example sentence for sentence videos
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence_text: Option<String>,
    /// Proxy-routed streaming URL, or the source URL when unresolvable
    pub playback_url: String,
    /// Direct embeddable preview URL, or the source URL when unresolvable
    pub preview_url: String,
    /// The URL exactly as entered in the sheet
    pub source_url: String,
    /// Display description, empty string when the cell was blank
    pub description: String,
    /// Signer credit, empty string when the cell was blank
    pub signer: String,
    /// Split, trimmed tags in cell order
    pub tags: Vec<String>,
    /// Entry date, verbatim from the sheet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// One vocabulary word with its videos, partitioned by kind.
///
/// Entries with zero videos are valid and retained; the partition lists keep
/// the video tab's original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Unique word id
    pub word_id: String,
    /// The vocabulary word
    pub word: String,
    /// Part-of-speech style annotation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_type: Option<String>,
    /// Dictionary meaning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    /// Split, trimmed tags in cell order
    pub tags: Vec<String>,
    /// Difficulty level label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Word demonstration videos, in sheet order
    pub word_videos: Vec<CatalogVideo>,
    /// Example sentence videos, in sheet order
    pub sentence_videos: Vec<CatalogVideo>,
}

impl CatalogEntry {
    /// Total number of attached videos across both kinds.
    #[must_use]
    pub fn video_count(&self) -> usize {
        self.word_videos.len() + self.sentence_videos.len()
    }
}
