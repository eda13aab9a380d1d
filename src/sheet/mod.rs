//! Sheet tab parsing: quoted CSV text into header-keyed records.
//!
//! The gviz export endpoint serves each tab as quoted CSV. Both stages here
//! are infallible by contract: the tabs are hand-edited, so malformed quoting,
//! ragged rows, and stray blank lines must degrade row by row rather than
//! fail the fetch.
//!
//! # Example
//!
//! ```
//! use signword_core::sheet::csv_to_records;
//!
//! let records = csv_to_records("word_id,word\nW1,사과\n");
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0]["word"], "사과");
//! ```

mod csv;
mod rows;

pub use csv::parse_csv;
pub use rows::{SheetRecord, csv_to_records, rows_to_records};
