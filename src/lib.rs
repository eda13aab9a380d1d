//! Signword Core Library
//!
//! This library provides the data-ingestion pipeline for the signword tool,
//! which turns two hand-edited spreadsheet tabs (words and videos) into a
//! searchable, relational catalog of vocabulary entries and their videos.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`sheet`] - CSV parsing and header-keyed record mapping
//! - [`catalog`] - Typed row normalization, the word/video join, and search
//! - [`drive`] - Drive file id extraction and playback/preview URL rewriting
//! - [`fetch`] - HTTP retrieval of the two sheet tabs
//! - [`config`] - Sheet, tab, and proxy endpoint configuration
//!
//! Data flows strictly upward: raw CSV text becomes rows, rows become typed
//! records, records are joined into [`catalog::CatalogEntry`] values. Every
//! stage below the fetch layer is pure and infallible; malformed input
//! degrades row by row instead of failing the whole catalog.

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod drive;
pub mod fetch;
pub mod sheet;
pub(crate) mod user_agent;

// Re-export commonly used types
pub use catalog::{
    CatalogEntry, CatalogVideo, DropReason, SearchFilter, VideoKind, VideoRow, WordRow,
    build_catalog, build_catalog_from_csv, collect_levels, collect_tags, filter_entries,
    find_entry, split_tags,
};
pub use config::CatalogConfig;
pub use drive::{build_playback_url, build_preview_url, extract_drive_file_id};
pub use fetch::{FetchError, SheetsClient};
pub use sheet::{SheetRecord, csv_to_records, parse_csv, rows_to_records};
