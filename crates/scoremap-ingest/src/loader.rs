//! Loading raw score tables and rule tables from files or uploaded bytes.

use std::path::Path;
use std::time::Instant;

use encoding_rs::Encoding;
use tracing::info;

use scoremap_model::{RawTable, RuleTable};

use crate::delimited::parse_csv_text;
use crate::error::{IngestError, Result};
use crate::format::SourceFormat;
use crate::spreadsheet::parse_workbook_bytes;
use crate::table::TextTable;
use crate::text::{decode_text, encoding_for_label};

/// Maximum input size (200 MB default).
pub const MAX_INPUT_FILE_SIZE: u64 = 200 * 1024 * 1024;

/// Options for decoding input files.
#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    /// Encoding used when CSV bytes are not valid UTF-8.
    pub fallback_encoding: Option<&'static Encoding>,
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            fallback_encoding: None,
            max_file_size: MAX_INPUT_FILE_SIZE,
        }
    }
}

impl IngestOptions {
    /// Sets the fallback encoding from a label such as `gbk`.
    pub fn with_fallback_label(mut self, label: &str) -> Result<Self> {
        self.fallback_encoding = Some(encoding_for_label(label)?);
        Ok(self)
    }
}

/// Check file size against the configured limit.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| map_io_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

fn map_io_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Decodes bytes by the format implied by `file_name`.
pub fn read_text_table_from_bytes(
    file_name: &str,
    bytes: Vec<u8>,
    options: &IngestOptions,
) -> Result<TextTable> {
    match SourceFormat::from_file_name(file_name) {
        SourceFormat::Spreadsheet => parse_workbook_bytes(bytes, file_name),
        SourceFormat::Csv => {
            let text = decode_text(&bytes, file_name, options.fallback_encoding)?;
            parse_csv_text(&text, file_name)
        }
    }
}

pub fn read_text_table(path: &Path, options: &IngestOptions) -> Result<TextTable> {
    check_file_size(path, options.max_file_size)?;
    let bytes = std::fs::read(path).map_err(|e| map_io_error(path, e))?;
    let start = Instant::now();
    let name = path.display().to_string();
    let table = read_text_table_from_bytes(&name, bytes, options)?;
    info!(
        path = %name,
        columns = table.headers.len(),
        rows = table.rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "table loaded"
    );
    Ok(table)
}

pub fn load_raw_table(path: &Path, options: &IngestOptions) -> Result<RawTable> {
    read_text_table(path, options).map(TextTable::into_raw_table)
}

pub fn load_rule_table(path: &Path, options: &IngestOptions) -> Result<RuleTable> {
    let table = read_text_table(path, options)?;
    table
        .into_rule_table()
        .map_err(|source| IngestError::InvalidRuleTable {
            source_name: path.display().to_string(),
            source,
        })
}

/// Loads the raw score table and the rule table.
pub fn load_tables(
    scores: &Path,
    rules: &Path,
    options: &IngestOptions,
) -> Result<(RawTable, RuleTable)> {
    Ok((load_raw_table(scores, options)?, load_rule_table(rules, options)?))
}

pub fn raw_table_from_bytes(
    file_name: &str,
    bytes: Vec<u8>,
    options: &IngestOptions,
) -> Result<RawTable> {
    read_text_table_from_bytes(file_name, bytes, options).map(TextTable::into_raw_table)
}

pub fn rule_table_from_bytes(
    file_name: &str,
    bytes: Vec<u8>,
    options: &IngestOptions,
) -> Result<RuleTable> {
    read_text_table_from_bytes(file_name, bytes, options)?
        .into_rule_table()
        .map_err(|source| IngestError::InvalidRuleTable {
            source_name: file_name.to_string(),
            source,
        })
}
