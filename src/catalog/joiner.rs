//! The relational join: word rows + video rows -> sorted catalog entries.

use std::cmp::Ordering;
use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::drive::{build_playback_url, build_preview_url};
use crate::sheet::csv_to_records;

use super::entry::{CatalogEntry, CatalogVideo};
use super::record::{VideoKind, VideoRow, WordRow, split_tags};

/// Why a row was left out of the catalog.
///
/// Drops are policy, not errors: the upstream tabs are hand-edited and
/// accumulate half-filled rows, so the join degrades row by row instead of
/// failing. Reasons are logged at debug level and never escalated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Word row with an empty `word_id` cell
    BlankWordId,
    /// Word row with an empty `word` cell
    BlankWord,
    /// Video row with an empty `video_url` cell
    BlankVideoUrl,
    /// Video row that names no parent word at all
    MissingParentReference,
    /// Video row whose `word_id` matches no retained word
    ParentNotFound,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankWordId => write!(f, "blank word_id"),
            Self::BlankWord => write!(f, "blank word"),
            Self::BlankVideoUrl => write!(f, "blank video_url"),
            Self::MissingParentReference => write!(f, "no parent word reference"),
            Self::ParentNotFound => write!(f, "parent word not found"),
        }
    }
}

/// Decides whether a word row is kept or dropped.
fn word_drop_reason(row: &WordRow) -> Option<DropReason> {
    if row.word_id.is_empty() {
        return Some(DropReason::BlankWordId);
    }
    if row.word.is_empty() {
        return Some(DropReason::BlankWord);
    }
    None
}

/// Decides whether a video row is kept or dropped, given the retained words.
fn video_drop_reason(
    row: &VideoRow,
    entries: &IndexMap<String, CatalogEntry>,
) -> Option<DropReason> {
    if row.video_url.is_empty() {
        return Some(DropReason::BlankVideoUrl);
    }
    let Some(word_id) = row.word_id.as_deref() else {
        return Some(DropReason::MissingParentReference);
    };
    if !entries.contains_key(word_id) {
        return Some(DropReason::ParentNotFound);
    }
    None
}

/// Builds the full catalog from normalized rows.
///
/// Word rows become entries keyed by `word_id` in an insertion-ordered map
/// where a later duplicate id overwrites the earlier entry but keeps its
/// original position. Video rows are then attached to their parent entry in
/// sheet order, partitioned by kind. Rows failing a drop predicate vanish
/// silently. The result is sorted by word, locale-ascending.
#[tracing::instrument(skip_all, fields(word_rows = words.len(), video_rows = videos.len()))]
#[must_use]
pub fn build_catalog(
    words: &[WordRow],
    videos: &[VideoRow],
    script_url: Option<&str>,
) -> Vec<CatalogEntry> {
    let mut entries: IndexMap<String, CatalogEntry> = IndexMap::new();

    for row in words {
        if let Some(reason) = word_drop_reason(row) {
            debug!(word_id = %row.word_id, word = %row.word, %reason, "dropped word row");
            continue;
        }
        // Last write wins on duplicate ids.
        entries.insert(row.word_id.clone(), entry_from_word(row));
    }

    for row in videos {
        if let Some(reason) = video_drop_reason(row, &entries) {
            debug!(video_id = %row.video_id, word_id = ?row.word_id, %reason, "dropped video row");
            continue;
        }
        let Some(entry) = row.word_id.as_deref().and_then(|id| entries.get_mut(id)) else {
            continue; // predicate already established the parent exists
        };
        let video = video_from_row(row, script_url);
        trace!(video_id = %video.id, kind = %video.kind, "attached video");
        match video.kind {
            VideoKind::Word => entry.word_videos.push(video),
            VideoKind::Sentence => entry.sentence_videos.push(video),
        }
    }

    let mut catalog: Vec<CatalogEntry> = entries.into_values().collect();
    catalog.sort_by(|a, b| compare_words(&a.word, &b.word));
    debug!(entries = catalog.len(), "catalog built");
    catalog
}

/// Runs the whole pure pipeline: two raw CSV blobs in, sorted catalog out.
///
/// Parses and row-maps both tabs, normalizes the records, and joins them.
/// Infallible: malformed input degrades per row, it never errors.
#[tracing::instrument(skip_all, fields(words_len = words_csv.len(), videos_len = videos_csv.len()))]
#[must_use]
pub fn build_catalog_from_csv(
    words_csv: &str,
    videos_csv: &str,
    script_url: Option<&str>,
) -> Vec<CatalogEntry> {
    let words: Vec<WordRow> = csv_to_records(words_csv)
        .iter()
        .map(WordRow::from_record)
        .collect();
    let videos: Vec<VideoRow> = csv_to_records(videos_csv)
        .iter()
        .map(VideoRow::from_record)
        .collect();
    debug!(words = words.len(), videos = videos.len(), "normalized sheet rows");
    build_catalog(&words, &videos, script_url)
}

fn entry_from_word(row: &WordRow) -> CatalogEntry {
    CatalogEntry {
        word_id: row.word_id.clone(),
        word: row.word.clone(),
        word_type: row.word_type.clone(),
        meaning: row.meaning.clone(),
        tags: split_tags(row.tags.as_deref()),
        level: row.level.clone(),
        notes: row.notes.clone(),
        word_videos: Vec::new(),
        sentence_videos: Vec::new(),
    }
}

fn video_from_row(row: &VideoRow, script_url: Option<&str>) -> CatalogVideo {
    let id = if row.video_id.is_empty() {
        row.video_url.clone()
    } else {
        row.video_id.clone()
    };
    CatalogVideo {
        id,
        kind: row.kind,
        word_id: row.word_id.clone(),
        sentence_text: row.sentence_text.clone(),
        playback_url: build_playback_url(&row.video_url, script_url),
        preview_url: build_preview_url(&row.video_url),
        source_url: row.video_url.clone(),
        description: row.description.clone(),
        signer: row.signer.clone(),
        tags: split_tags(row.tags.as_deref()),
        created_at: row.created_at.clone(),
    }
}

/// Dictionary-style word ordering.
///
/// Case-insensitive comparison with a raw tiebreak. Hangul has no case, so
/// Korean words keep plain code-point order, which matches dictionary order.
fn compare_words(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
