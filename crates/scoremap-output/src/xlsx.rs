//! XLSX output via `rust_xlsxwriter`.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use scoremap_model::{AugmentedTable, CellValue};

use crate::common::ensure_parent_dir;
use crate::error::{OutputError, Result};

/// Worksheet row limit, header included.
const MAX_ROWS: usize = 1_048_576;
const MAX_COLUMNS: usize = 16_384;

const SHEET_NAME: &str = "Assigned";

fn build_workbook(table: &AugmentedTable) -> Result<Workbook> {
    let rows = table.row_count();
    let columns = table.columns().len();
    if rows + 1 > MAX_ROWS || columns > MAX_COLUMNS {
        return Err(OutputError::TooLarge { rows, columns });
    }

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    for (col, name) in table.columns().iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, name, &header_format)?;
    }
    for (row_idx, row) in table.rows().iter().enumerate() {
        let r = (row_idx + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            let c = col as u16;
            match cell {
                CellValue::Text(text) if !text.is_empty() => {
                    sheet.write_string(r, c, text)?;
                }
                CellValue::Number(value) => {
                    sheet.write_number(r, c, *value)?;
                }
                CellValue::Text(_) | CellValue::Missing => {}
            }
        }
    }
    Ok(workbook)
}

/// Serializes the table to XLSX bytes, for download-style delivery.
pub fn xlsx_to_bytes(table: &AugmentedTable) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(table)?;
    Ok(workbook.save_to_buffer()?)
}

/// Writes the table to an XLSX file, replacing any existing file.
pub fn write_xlsx(path: &Path, table: &AugmentedTable) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut workbook = build_workbook(table)?;
    workbook.save(path)?;
    Ok(())
}
