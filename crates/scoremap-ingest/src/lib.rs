//! Score table ingestion.
//!
//! Decodes CSV and spreadsheet inputs into the typed tables consumed by the
//! assigner. The file extension picks the decoder: workbook extensions go to
//! `calamine`, everything else is read as CSV.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use scoremap_ingest::{IngestOptions, load_tables};
//!
//! let options = IngestOptions::default().with_fallback_label("gbk")?;
//! let (raw, rules) = load_tables(Path::new("scores.xlsx"), Path::new("rules.csv"), &options)?;
//! ```

mod delimited;
mod error;
mod format;
mod loader;
mod spreadsheet;
mod table;
mod text;

// === Error Types ===
pub use error::{IngestError, Result};

// === Decoding ===
pub use delimited::parse_csv_text;
pub use format::SourceFormat;
pub use spreadsheet::parse_workbook_bytes;
pub use table::TextTable;
pub use text::{decode_text, encoding_for_label};

// === Loading ===
pub use loader::{
    IngestOptions, MAX_INPUT_FILE_SIZE, check_file_size, load_raw_table, load_rule_table,
    load_tables, raw_table_from_bytes, read_text_table, read_text_table_from_bytes,
    rule_table_from_bytes,
};
