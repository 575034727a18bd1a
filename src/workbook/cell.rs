use calamine::{Data, DataType};
use serde_json::Value as JsonValue;
use std::fmt;

/// A single spreadsheet value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Cell {
    /// Empty cells and empty strings both count as "no value".
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Text form of a non-empty cell
    pub fn as_text(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }

    /// JSON form used by the exporter. Whole floats become integers, since
    /// spreadsheet numbers are stored as floats even when typed as `25`.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Cell::Empty => JsonValue::String(String::new()),
            Cell::String(s) => JsonValue::String(s.clone()),
            Cell::Int(i) => JsonValue::from(*i),
            Cell::Float(f) => match whole_number(*f) {
                Some(i) => JsonValue::from(i),
                None => serde_json::Number::from_f64(*f)
                    .map(JsonValue::Number)
                    .unwrap_or(JsonValue::Null),
            },
            Cell::Bool(b) => JsonValue::Bool(*b),
        }
    }

    pub(crate) fn from_data(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::String(s.clone()),
            Data::Int(i) => Cell::Int(*i),
            Data::Float(f) => Cell::Float(*f),
            Data::Bool(b) => Cell::Bool(*b),
            // NaiveDateTime's Debug form is ISO-8601 (`2024-01-01T12:00:00`)
            Data::DateTime(dt) => match data.as_datetime() {
                Some(parsed) => Cell::String(format!("{parsed:?}")),
                None => Cell::Float(dt.as_f64()),
            },
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::String(s.clone()),
            Data::Error(e) => Cell::String(e.to_string()),
        }
    }
}

fn whole_number(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::String(s) => f.write_str(s),
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Float(v) => match whole_number(*v) {
                Some(i) => write!(f, "{i}"),
                None => write!(f, "{v}"),
            },
            Cell::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::String(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::String(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{ExcelDateTime, ExcelDateTimeType};
    use serde_json::json;

    #[test]
    fn test_empty_string_counts_as_empty() {
        assert!(Cell::Empty.is_empty());
        assert!(Cell::from("").is_empty());
        assert!(!Cell::from(" ").is_empty());
        assert!(!Cell::Int(0).is_empty());
    }

    #[test]
    fn test_to_json() {
        assert_eq!(Cell::Empty.to_json(), json!(""));
        assert_eq!(Cell::from("Zap").to_json(), json!("Zap"));
        assert_eq!(Cell::Float(25.0).to_json(), json!(25));
        assert_eq!(Cell::Float(2.5).to_json(), json!(2.5));
        assert_eq!(Cell::Int(-3).to_json(), json!(-3));
        assert_eq!(Cell::Bool(true).to_json(), json!(true));
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::Float(10.0).to_string(), "10");
        assert_eq!(Cell::Float(0.25).to_string(), "0.25");
        assert_eq!(Cell::Empty.to_string(), "");
        assert_eq!(Cell::from("text").as_text(), Some("text".to_string()));
        assert_eq!(Cell::Empty.as_text(), None);
    }

    #[test]
    fn test_from_calamine_data() {
        assert_eq!(Cell::from_data(&Data::Empty), Cell::Empty);
        assert_eq!(Cell::from_data(&Data::Float(1.5)), Cell::Float(1.5));
        assert_eq!(
            Cell::from_data(&Data::String("intro".to_string())),
            Cell::from("intro")
        );
        assert_eq!(
            Cell::from_data(&Data::DurationIso("PT1H".to_string())),
            Cell::from("PT1H")
        );
    }

    #[test]
    fn test_excel_dates_become_iso_text() {
        let noon = ExcelDateTime::new(45292.5, ExcelDateTimeType::DateTime, false);
        assert_eq!(
            Cell::from_data(&Data::DateTime(noon)),
            Cell::from("2024-01-01T12:00:00")
        );

        let midnight = ExcelDateTime::new(45292.0, ExcelDateTimeType::DateTime, false);
        assert_eq!(
            Cell::from_data(&Data::DateTime(midnight)).to_json(),
            json!("2024-01-01T00:00:00")
        );
    }
}
