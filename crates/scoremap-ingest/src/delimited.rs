//! Delimited-text (CSV) decoding.

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};
use crate::table::TextTable;
use crate::text::{normalize_cell, split_header};

/// Parses CSV text into a header row and string rows.
///
/// Records may be ragged; rows are padded to the header width later.
pub fn parse_csv_text(text: &str, source_name: &str) -> Result<TextTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            source_name: source_name.to_string(),
            source,
        })?;
        raw_rows.push(record.iter().map(normalize_cell).collect());
    }
    let (headers, rows) = split_header(raw_rows);
    Ok(TextTable::new(headers, rows))
}
