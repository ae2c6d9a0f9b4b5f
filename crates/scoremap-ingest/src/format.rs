//! Source format detection from file names.

use std::path::Path;

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Delimited text, read with the `csv` crate.
    Csv,
    /// Excel or OpenDocument workbook.
    Spreadsheet,
}

impl SourceFormat {
    /// Any name without a spreadsheet extension is treated as CSV.
    pub fn from_file_name(name: &str) -> Self {
        Self::from_path(Path::new(name))
    }

    pub fn from_path(path: &Path) -> Self {
        let is_spreadsheet = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                SPREADSHEET_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            });
        if is_spreadsheet {
            Self::Spreadsheet
        } else {
            Self::Csv
        }
    }
}
