//! Pure search, facet, and lookup helpers over the joined catalog.

use std::collections::BTreeSet;

use tracing::trace;

use super::entry::CatalogEntry;

/// Filter criteria for catalog searches.
///
/// `None` in any position means "no constraint". The term is trimmed and
/// lowercased before matching; level and tag are compared exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Free-text term matched against word, meaning, tags, and notes
    pub term: Option<String>,
    /// Level label the entry must carry
    pub level: Option<String>,
    /// Tag the entry must contain
    pub tag: Option<String>,
}

impl SearchFilter {
    /// Returns true when the entry satisfies every set criterion.
    ///
    /// An entry without a level never matches a level filter; the term is a
    /// case-insensitive substring match over the entry's searchable text.
    #[must_use]
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        if let Some(level) = self.level.as_deref()
            && entry.level.as_deref() != Some(level)
        {
            return false;
        }
        if let Some(tag) = self.tag.as_deref()
            && !entry.tags.iter().any(|candidate| candidate == tag)
        {
            return false;
        }
        let term = self.term.as_deref().unwrap_or_default().trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        search_haystack(entry).contains(&term)
    }
}

/// Space-joined lowercase text the free-text term is matched against.
fn search_haystack(entry: &CatalogEntry) -> String {
    let tags = entry.tags.join(" ");
    [
        entry.word.as_str(),
        entry.meaning.as_deref().unwrap_or_default(),
        tags.as_str(),
        entry.notes.as_deref().unwrap_or_default(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Filters entries down to those matching the criteria, preserving order.
#[must_use]
pub fn filter_entries<'a>(
    entries: &'a [CatalogEntry],
    filter: &SearchFilter,
) -> Vec<&'a CatalogEntry> {
    let matched: Vec<&CatalogEntry> = entries
        .iter()
        .filter(|entry| filter.matches(entry))
        .collect();
    trace!(total = entries.len(), matched = matched.len(), "filtered catalog");
    matched
}

/// Collects the distinct level labels present in the catalog, sorted.
///
/// Entries without a level contribute nothing.
#[must_use]
pub fn collect_levels(entries: &[CatalogEntry]) -> Vec<String> {
    let mut levels = BTreeSet::new();
    for entry in entries {
        if let Some(level) = &entry.level {
            levels.insert(level.clone());
        }
    }
    levels.into_iter().collect()
}

/// Collects the distinct tags present in the catalog, sorted.
#[must_use]
pub fn collect_tags(entries: &[CatalogEntry]) -> Vec<String> {
    let mut tags = BTreeSet::new();
    for entry in entries {
        for tag in &entry.tags {
            tags.insert(tag.clone());
        }
    }
    tags.into_iter().collect()
}

/// Looks up one entry by exact word id.
#[must_use]
pub fn find_entry<'a>(entries: &'a [CatalogEntry], word_id: &str) -> Option<&'a CatalogEntry> {
    entries.iter().find(|entry| entry.word_id == word_id)
}
