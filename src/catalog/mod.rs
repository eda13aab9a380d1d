//! Typed catalog records, the relational join, and search helpers.
//!
//! This module owns everything between raw sheet records and the consumer
//! surface: normalization of header-keyed records into [`WordRow`] and
//! [`VideoRow`], the word/video join into sorted [`CatalogEntry`] values,
//! and the pure filter/facet/lookup helpers the CLI searches with.
//!
//! # Example
//!
//! ```
//! use signword_core::build_catalog_from_csv;
//!
//! let words = "word_id,word,level\nW1,사과,초급\n";
//! let videos = "video_id,type,word_id,video_url\n\
//!               V1,word,W1,https://drive.google.com/file/d/AAA/view\n";
//!
//! let catalog = build_catalog_from_csv(words, videos, None);
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog[0].word, "사과");
//! assert_eq!(catalog[0].word_videos.len(), 1);
//! ```

mod entry;
mod joiner;
mod record;
mod search;

pub use entry::{CatalogEntry, CatalogVideo};
pub use joiner::{DropReason, build_catalog, build_catalog_from_csv};
pub use record::{VideoKind, VideoRow, WordRow, split_tags};
pub use search::{SearchFilter, collect_levels, collect_tags, filter_entries, find_entry};
