//! Observations and context maps: flat variable → heterogeneous value records.

use std::collections::BTreeMap;
use std::fmt;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Name of an observable quantity.
pub type Variable = String;

/// One observational record. Keys iterate in lexical order.
pub type Observation = BTreeMap<Variable, ObservedValue>;

/// Context supplied to explanation and intervention calls. Same shape as an observation.
pub type Context = BTreeMap<String, ObservedValue>;

/// A heterogeneous observed value. Interpretation is contextual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObservedValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Null,
}

impl ObservedValue {
    /// Numeric reading of the value: booleans are 1/0, text is parsed.
    /// Non-finite numbers and unparseable text yield `None`.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Null => None,
        };
        value.filter(|v| v.is_finite())
    }

    /// Truthiness: `true`, non-zero numbers, and non-empty text.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::Null => false,
        }
    }

    /// Timestamp in seconds. Numbers are taken as-is; text may be numeric or RFC 3339.
    pub fn as_timestamp(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().or_else(|| {
                DateTime::parse_from_rfc3339(s.trim())
                    .ok()
                    .map(|dt| dt.timestamp_millis() as f64 / 1000.0)
            }),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for ObservedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<bool> for ObservedValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for ObservedValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for ObservedValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for ObservedValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for ObservedValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ObservedValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_reading_covers_bool_and_text() {
        assert_eq!(ObservedValue::Bool(true).as_f64(), Some(1.0));
        assert_eq!(ObservedValue::from(" 2.5 ").as_f64(), Some(2.5));
        assert_eq!(ObservedValue::from("high").as_f64(), None);
        assert_eq!(ObservedValue::Number(f64::NAN).as_f64(), None);
        assert_eq!(ObservedValue::Null.as_f64(), None);
    }

    #[test]
    fn truthiness() {
        assert!(ObservedValue::from(3).is_truthy());
        assert!(!ObservedValue::from(0).is_truthy());
        assert!(!ObservedValue::from("").is_truthy());
        assert!(ObservedValue::from("no").is_truthy());
        assert!(!ObservedValue::Null.is_truthy());
    }

    #[test]
    fn rfc3339_timestamps_parse() {
        let early = ObservedValue::from("2024-01-01T00:00:00Z").as_timestamp().unwrap();
        let late = ObservedValue::from("2024-01-01T00:00:01.500Z").as_timestamp().unwrap();
        assert!((late - early - 1.5).abs() < 1e-9);
        assert_eq!(ObservedValue::from(12).as_timestamp(), Some(12.0));
        assert_eq!(ObservedValue::Bool(true).as_timestamp(), None);
    }

    #[test]
    fn untagged_json_roundtrip_shapes() {
        let obs: Observation =
            serde_json::from_str(r#"{"t": true, "o": 10, "label": "x", "gap": null}"#).unwrap();
        assert_eq!(obs["t"], ObservedValue::Bool(true));
        assert_eq!(obs["o"], ObservedValue::Number(10.0));
        assert_eq!(obs["label"], ObservedValue::Text("x".into()));
        assert!(obs["gap"].is_null());
    }
}
