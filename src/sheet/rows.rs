//! Header-keyed record mapping over parsed CSV rows.

use std::collections::HashMap;

use tracing::trace;

use super::csv::parse_csv;

/// One data row keyed by its (lowercased, trimmed) header names.
pub type SheetRecord = HashMap<String, String>;

/// Parses CSV text and maps it into header-keyed records in one step.
#[must_use]
pub fn csv_to_records(text: &str) -> Vec<SheetRecord> {
    rows_to_records(parse_csv(text))
}

/// Maps parsed rows into header-keyed records.
///
/// Row 0 is the header; each cell is trimmed and lowercased to form the keys.
/// For every later row, each header key gets the corresponding field trimmed,
/// or the empty string when the row is shorter than the header. Columns whose
/// header cell is blank are skipped entirely, and extra fields beyond the
/// header are ignored. A duplicate header name keeps the value of the
/// rightmost column with that name.
///
/// Rows whose values all trim to the empty string are dropped; trailing blank
/// lines in an exported tab never become records.
#[must_use]
pub fn rows_to_records(rows: Vec<Vec<String>>) -> Vec<SheetRecord> {
    let mut rows = rows.into_iter();
    let Some(header_row) = rows.next() else {
        return Vec::new();
    };
    let header: Vec<String> = header_row
        .iter()
        .map(|cell| cell.trim().to_lowercase())
        .collect();

    let mut records = Vec::new();
    for row in rows {
        let mut record = SheetRecord::new();
        for (index, key) in header.iter().enumerate() {
            if key.is_empty() {
                continue;
            }
            let value = row.get(index).map(String::as_str).unwrap_or_default();
            record.insert(key.clone(), value.trim().to_string());
        }
        if record.values().any(|value| !value.is_empty()) {
            records.push(record);
        } else {
            trace!("dropped blank row");
        }
    }
    records
}
