use std::path::PathBuf;

use thiserror::Error;

/// Failures while serializing or writing an augmented table.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The table does not fit in a worksheet.
    #[error("table with {rows} rows and {columns} columns exceeds worksheet limits")]
    TooLarge { rows: usize, columns: usize },
}

pub type Result<T> = std::result::Result<T, OutputError>;
