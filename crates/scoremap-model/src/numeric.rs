//! Numeric coercion helpers shared by every crate.

/// Parses a cell as a finite f64.
///
/// Full-width digits and signs (`８５`, `－３．５`) and underscores between
/// digits (`1_000`) are accepted. Blank, non-numeric, NaN and infinite values
/// all yield `None`.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = if trimmed.is_ascii() && !trimmed.contains('_') {
        trimmed.parse::<f64>().ok()
    } else {
        ascii_number(trimmed)?.parse::<f64>().ok()
    };
    parsed.filter(|v| v.is_finite())
}

/// Folds full-width forms to ASCII and drops digit-group underscores.
///
/// Returns `None` for an underscore that does not sit between two digits.
fn ascii_number(value: &str) -> Option<String> {
    let chars: Vec<char> = value.chars().map(fold_full_width).collect();
    let mut out = String::with_capacity(chars.len());
    for (idx, &ch) in chars.iter().enumerate() {
        if ch == '_' {
            let after_digit = idx > 0 && chars[idx - 1].is_ascii_digit();
            let before_digit = chars.get(idx + 1).is_some_and(char::is_ascii_digit);
            if !(after_digit && before_digit) {
                return None;
            }
            continue;
        }
        out.push(ch);
    }
    Some(out)
}

fn fold_full_width(ch: char) -> char {
    match ch {
        // ０-９ + - . E e
        '\u{FF10}'..='\u{FF19}' | '\u{FF0B}' | '\u{FF0D}' | '\u{FF0E}' | '\u{FF25}' | '\u{FF45}' => {
            char::from_u32(u32::from(ch) - 0xFEE0).unwrap_or(ch)
        }
        _ => ch,
    }
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
