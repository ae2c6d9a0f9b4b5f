//! Error types for score table ingestion.

use std::path::PathBuf;

use scoremap_model::AssignError;
use thiserror::Error;

/// Errors that can occur while loading score and rule tables.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is {size} bytes, limit is {max_size}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Encoding Errors ===
    /// A byte-order mark announced an encoding we do not read.
    #[error("unsupported encoding {encoding} in {source_name}")]
    UnsupportedEncoding {
        source_name: String,
        encoding: &'static str,
    },

    /// Bytes are not UTF-8 and no fallback encoding was configured.
    #[error("{source_name} is not valid UTF-8 (set a fallback encoding such as gbk)")]
    InvalidUtf8 { source_name: String },

    /// The fallback encoding label is not recognized.
    #[error("unknown encoding label '{label}'")]
    UnknownEncoding { label: String },

    // === Parsing Errors ===
    #[error("failed to parse CSV {source_name}: {source}")]
    CsvParse {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read spreadsheet {source_name}: {message}")]
    SpreadsheetParse {
        source_name: String,
        message: String,
    },

    /// Workbook contains no worksheet.
    #[error("spreadsheet {source_name} has no worksheets")]
    NoWorksheet { source_name: String },

    // === Rule Table Errors ===
    #[error("invalid rule table {source_name}: {source}")]
    InvalidRuleTable {
        source_name: String,
        #[source]
        source: AssignError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
