//! Byte decoding and cell normalization.

use encoding_rs::Encoding;

use crate::error::{IngestError, Result};

/// Resolves a WHATWG encoding label such as `gbk` or `windows-1252`.
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| IngestError::UnknownEncoding {
        label: label.to_string(),
    })
}

/// Decodes file bytes to text.
///
/// UTF-8 is tried first (a leading BOM is dropped). UTF-16 byte-order marks
/// are rejected. Other bytes are decoded with `fallback` when one is given.
pub fn decode_text(
    bytes: &[u8],
    source_name: &str,
    fallback: Option<&'static Encoding>,
) -> Result<String> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            source_name: source_name.to_string(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            source_name: source_name.to_string(),
            encoding: "UTF-16 BE",
        });
    }
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.to_string());
    }
    let Some(encoding) = fallback else {
        return Err(IngestError::InvalidUtf8 {
            source_name: source_name.to_string(),
        });
    };
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        tracing::warn!(
            source = %source_name,
            encoding = encoding.name(),
            "replaced undecodable bytes"
        );
    }
    Ok(text.into_owned())
}

/// Trims a header and collapses inner whitespace runs to one space.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Splits decoded rows into a header and data rows.
///
/// Blank rows before the header are dropped; the first row with a value is
/// the header. After it only blank lines are dropped: a record of several
/// empty fields (`,,`) is kept as a row with no scores.
pub fn split_header(rows: Vec<Vec<String>>) -> (Vec<String>, Vec<Vec<String>>) {
    let mut rows = rows.into_iter().skip_while(|row| is_blank_row(row));
    let Some(header) = rows.next() else {
        return (Vec::new(), Vec::new());
    };
    let headers = header.iter().map(|value| normalize_header(value)).collect();
    (headers, rows.filter(|row| !is_blank_line(row)).collect())
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|value| value.trim().is_empty())
}

/// An empty or whitespace-only line, as opposed to a record of empty fields.
fn is_blank_line(row: &[String]) -> bool {
    row.len() <= 1 && is_blank_row(row)
}
