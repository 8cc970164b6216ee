//! Tagged field values.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The value a field resolves to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// Whole number
    Integer(i64),
    /// Floating-point number
    Float(f64),
    /// Free text
    Text(String),
    /// No usable value
    #[default]
    Absent,
}

impl FieldValue {
    /// Convert a raw source value.
    ///
    /// Falsy values collapse to [`FieldValue::Absent`]: `null`, `false`, zero,
    /// the empty string, and empty lists or objects are all treated as if the
    /// key were missing. A field that is legitimately zero is therefore
    /// reported as absent.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null | Value::Bool(false) => Self::Absent,
            Value::Bool(true) => Self::Text("True".to_string()),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    if i == 0 { Self::Absent } else { Self::Integer(i) }
                } else {
                    match n.as_f64() {
                        Some(f) if f != 0.0 => Self::Float(f),
                        _ => Self::Absent,
                    }
                }
            }
            Value::String(s) if s.is_empty() => Self::Absent,
            Value::String(s) => Self::Text(s.clone()),
            Value::Array(items) if items.is_empty() => Self::Absent,
            Value::Object(entries) if entries.is_empty() => Self::Absent,
            other => Self::Text(other.to_string()),
        }
    }

    /// Whether this is [`FieldValue::Absent`].
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Numeric view of the value.
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Text(_) | Self::Absent => None,
        }
    }

    /// Text view of the value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Natural string form; absent values print as `None`.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
            Self::Absent => f.write_str("None"),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null))]
    #[case(json!(false))]
    #[case(json!(0))]
    #[case(json!(0.0))]
    #[case(json!(-0.0))]
    #[case(json!(""))]
    #[case(json!([]))]
    #[case(json!({}))]
    fn test_falsy_values_are_absent(#[case] raw: Value) {
        assert_eq!(FieldValue::from_json(&raw), FieldValue::Absent);
    }

    #[rstest]
    #[case(json!(2_500_000_000_000_i64), FieldValue::Integer(2_500_000_000_000))]
    #[case(json!(-12), FieldValue::Integer(-12))]
    #[case(json!(1.2), FieldValue::Float(1.2))]
    #[case(json!("Technology"), FieldValue::Text("Technology".to_string()))]
    #[case(json!(true), FieldValue::Text("True".to_string()))]
    #[case(json!(["a"]), FieldValue::Text("[\"a\"]".to_string()))]
    fn test_truthy_values(#[case] raw: Value, #[case] expected: FieldValue) {
        assert_eq!(FieldValue::from_json(&raw), expected);
    }

    #[test]
    fn test_huge_unsigned_becomes_float() {
        let raw = json!(u64::MAX);
        assert!(matches!(FieldValue::from_json(&raw), FieldValue::Float(_)));
    }

    #[test]
    fn test_display_natural_form() {
        assert_eq!(FieldValue::Integer(42).to_string(), "42");
        assert_eq!(FieldValue::Float(1.5).to_string(), "1.5");
        assert_eq!(FieldValue::from("Spain").to_string(), "Spain");
        assert_eq!(FieldValue::Absent.to_string(), "None");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(FieldValue::from(None::<f64>), FieldValue::Absent);
        assert_eq!(FieldValue::from(Some(3_i64)), FieldValue::Integer(3));
    }

    #[test]
    fn test_views() {
        assert_eq!(FieldValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(FieldValue::from("x").as_text(), Some("x"));
        assert!(FieldValue::Absent.as_f64().is_none());
        assert!(FieldValue::Absent.is_absent());
    }
}
