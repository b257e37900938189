use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell's scalar value.
///
/// Serialized untagged so that a row travels to and from JavaScript as a
/// plain array such as `[1, "title", "https://..."]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Text shown in the cell's input element.
    pub fn display(&self) -> String {
        self.to_string()
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Number(_) => None,
            CellValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

/// A fixed-width record. Its index in the dataset is its identity.
pub type Row = Vec<CellValue>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_row_roundtrip_shape() {
        let row: Row = serde_json::from_str(r#"[1, "accusamus", "https://x/600"]"#).unwrap();
        assert_eq!(row[0].as_number(), Some(1.0));
        assert_eq!(row[1].as_text(), Some("accusamus"));
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"[1.0,"accusamus","https://x/600"]"#
        );
    }

    #[test]
    fn test_display_integer_number_has_no_fraction() {
        assert_eq!(CellValue::from(42u32).display(), "42");
        assert_eq!(CellValue::from(2.5).display(), "2.5");
        assert_eq!(CellValue::from("abc").display(), "abc");
    }
}
