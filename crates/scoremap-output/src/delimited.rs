//! CSV output via the `csv` crate.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use scoremap_model::AugmentedTable;

use crate::common::ensure_parent_dir;
use crate::error::{OutputError, Result};

/// Writes a header record followed by one record per row.
pub fn write_csv_to<W: Write>(writer: W, table: &AugmentedTable) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(ToString::to_string))?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn csv_to_bytes(table: &AugmentedTable) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_csv_to(&mut buffer, table)?;
    Ok(buffer)
}

pub fn write_csv(path: &Path, table: &AugmentedTable) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv_to(file, table)
}
