//! Normalization of raw sheet records into typed word and video rows.
//!
//! Field-level coercion only; whether a row makes it into the catalog is
//! decided later by the joiner. Blank optional cells become `None`, except
//! `description` and `signer` on video rows, which stay empty strings for
//! the display layer.

use std::fmt;

use serde::Serialize;

use crate::sheet::SheetRecord;

/// Kind of instructional video a row describes.
///
/// Anything that is not case-insensitively `"sentence"` is a word video,
/// including blank and unrecognized cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    /// A single-word demonstration clip
    #[default]
    Word,
    /// An example sentence using the word
    Sentence,
}

impl VideoKind {
    /// Canonicalizes a raw `type` cell.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("sentence") {
            Self::Sentence
        } else {
            Self::Word
        }
    }

    /// Lowercase name as it appears in the sheet and in exported JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Sentence => "sentence",
        }
    }
}

impl fmt::Display for VideoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One normalized row from the words tab.
///
/// `word_id` and `word` may still be empty here; required-non-empty
/// filtering is the joiner's decision, not the normalizer's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRow {
    /// Primary key cell, possibly empty
    pub word_id: String,
    /// The vocabulary word itself, possibly empty
    pub word: String,
    /// Part-of-speech style annotation
    pub word_type: Option<String>,
    /// Dictionary meaning
    pub meaning: Option<String>,
    /// Unsplit tag cell, `,`/`;` separated
    pub tags: Option<String>,
    /// Difficulty level label
    pub level: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

impl WordRow {
    /// Builds a word row from a header-keyed sheet record.
    #[must_use]
    pub fn from_record(record: &SheetRecord) -> Self {
        Self {
            word_id: field(record, "word_id"),
            word: field(record, "word"),
            word_type: optional_field(record, "word_type"),
            meaning: optional_field(record, "meaning"),
            tags: optional_field(record, "tags"),
            level: optional_field(record, "level"),
            notes: optional_field(record, "notes"),
        }
    }
}

/// One normalized row from the videos tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRow {
    /// Declared video id, possibly empty (the source URL stands in later)
    pub video_id: String,
    /// Canonicalized video kind
    pub kind: VideoKind,
    /// Foreign key into the words tab
    pub word_id: Option<String>,
    /// Full example sentence for sentence videos
    pub sentence_text: Option<String>,
    /// Source video URL, possibly empty
    pub video_url: String,
    /// Display description, blank kept as empty string
    pub description: String,
    /// Signer credit, blank kept as empty string
    pub signer: String,
    /// Unsplit tag cell, `,`/`;` separated
    pub tags: Option<String>,
    /// Entry date, passed through verbatim
    pub created_at: Option<String>,
}

impl VideoRow {
    /// Builds a video row from a header-keyed sheet record.
    #[must_use]
    pub fn from_record(record: &SheetRecord) -> Self {
        Self {
            video_id: field(record, "video_id"),
            kind: VideoKind::from_raw(&field(record, "type")),
            word_id: optional_field(record, "word_id"),
            sentence_text: optional_field(record, "sentence_text"),
            video_url: field(record, "video_url"),
            description: field(record, "description"),
            signer: field(record, "signer"),
            tags: optional_field(record, "tags"),
            created_at: optional_field(record, "created_at"),
        }
    }
}

/// Splits a raw tag cell on `,` and `;`, trimming pieces and dropping
/// empties. Order is preserved and duplicates are kept.
///
/// # Examples
///
/// ```
/// use signword_core::split_tags;
///
/// assert_eq!(split_tags(Some("a, b;c ,,d")), vec!["a", "b", "c", "d"]);
/// assert!(split_tags(None).is_empty());
/// ```
#[must_use]
pub fn split_tags(value: Option<&str>) -> Vec<String> {
    let Some(raw) = value else {
        return Vec::new();
    };
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Looks up a cell by header name, defaulting to empty for missing keys.
fn field(record: &SheetRecord, key: &str) -> String {
    record.get(key).cloned().unwrap_or_default()
}

/// Looks up a cell by header name, mapping blank and missing to `None`.
fn optional_field(record: &SheetRecord, key: &str) -> Option<String> {
    record.get(key).filter(|value| !value.is_empty()).cloned()
}
