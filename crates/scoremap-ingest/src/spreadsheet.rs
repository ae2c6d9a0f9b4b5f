//! Workbook decoding via `calamine`.
//!
//! Only the first worksheet is read. Numeric cells are rendered the way they
//! would appear in a CSV export, so `85.0` becomes `85`.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use scoremap_model::format_numeric;

use crate::error::{IngestError, Result};
use crate::table::TextTable;
use crate::text::{normalize_cell, split_header};

pub fn parse_workbook_bytes(bytes: Vec<u8>, source_name: &str) -> Result<TextTable> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|err| {
        IngestError::SpreadsheetParse {
            source_name: source_name.to_string(),
            message: err.to_string(),
        }
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            source_name: source_name.to_string(),
        })?
        .map_err(|err| IngestError::SpreadsheetParse {
            source_name: source_name.to_string(),
            message: err.to_string(),
        })?;
    let raw_rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    tracing::debug!(
        source = %source_name,
        rows = raw_rows.len(),
        "read first worksheet"
    );
    let (headers, rows) = split_header(raw_rows);
    Ok(TextTable::new(headers, rows))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(value) => normalize_cell(value),
        Data::Float(value) => format_numeric(*value),
        Data::Int(value) => value.to_string(),
        other => normalize_cell(&other.to_string()),
    }
}
