//! Output generation for assigned score tables.

pub mod common;
pub mod delimited;
pub mod error;
pub mod xlsx;

use std::path::Path;

use scoremap_model::AugmentedTable;
use tracing::info;

pub use common::{OutputFormat, default_output_path, ensure_parent_dir};
pub use delimited::{csv_to_bytes, write_csv, write_csv_to};
pub use error::{OutputError, Result};
pub use xlsx::{write_xlsx, xlsx_to_bytes};

/// Writes `table` to `path`, choosing the format from the extension.
pub fn write_table(path: &Path, table: &AugmentedTable) -> Result<OutputFormat> {
    let format = OutputFormat::from_path(path);
    match format {
        OutputFormat::Xlsx => write_xlsx(path, table)?,
        OutputFormat::Csv => write_csv(path, table)?,
    }
    info!(
        path = %path.display(),
        format = ?format,
        rows = table.row_count(),
        "output written"
    );
    Ok(format)
}
