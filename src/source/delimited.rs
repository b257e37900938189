//! Minimal CSV/TSV reader producing one row per non-empty line.

use crate::types::{CellValue, Row};

/// Delimiter for parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }
}

/// Split delimited text into rows. Fields that parse as numbers become
/// `CellValue::Number`, everything else stays text.
///
/// Row widths are not checked here; the table rejects ragged input on load.
pub fn rows_from_delimited(text: &str, delim: Delimiter) -> Vec<Row> {
    let sep = delim.as_char();
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            split_line(line, sep)
                .into_iter()
                .map(|field| detect_value(field.trim()))
                .collect()
        })
        .collect()
}

fn detect_value(field: &str) -> CellValue {
    match field.parse::<f64>() {
        Ok(n) if n.is_finite() => CellValue::Number(n),
        _ => CellValue::Text(field.to_string()),
    }
}

/// Split a line respecting quoted fields.
fn split_line(line: &str, sep: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped quote
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == sep {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);
    fields
}
