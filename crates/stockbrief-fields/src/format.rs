//! Display formatting for field values.
//!
//! The policy dispatches on the value's tag, with the field's percentage flag
//! as a separate input:
//!
//! | value            | percentage field | other fields        |
//! |------------------|------------------|---------------------|
//! | absent           | `None`           | `None`              |
//! | integer > 1000   | `v*100` + `%`    | `1,234,567`         |
//! | other integer    | `v*100` + `%`    | natural form        |
//! | float            | `v*100` + `%`    | two decimals        |
//! | text             | natural form     | natural form        |

use crate::field::Field;
use crate::record::StockRecord;
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};

/// Display string for absent values.
pub const ABSENT_DISPLAY: &str = "None";

/// A label and its display value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedField {
    /// Field label
    pub label: String,
    /// Formatted value
    pub value: String,
}

impl FormattedField {
    /// Create a new formatted field.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Format a value for display.
pub fn format_value(value: &FieldValue, percentage: bool) -> String {
    match (value, percentage) {
        (FieldValue::Absent, _) => ABSENT_DISPLAY.to_string(),
        (FieldValue::Integer(i), true) => format_percentage(*i as f64),
        (FieldValue::Float(x), true) => format_percentage(*x),
        (FieldValue::Integer(i), false) if *i > 1000 => group_thousands(*i),
        (FieldValue::Float(x), false) => format!("{x:.2}"),
        (other, _) => other.to_string(),
    }
}

/// Render a ratio as a percentage with two decimals (`0.0345` -> `3.45%`).
pub fn format_percentage(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// Insert `,` between groups of three digits.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format one field of `record`.
pub fn format_field(record: &StockRecord, field: Field) -> FormattedField {
    FormattedField::new(
        field.label(),
        format_value(record.get(field), field.is_percentage()),
    )
}

/// Format every field of `record`, in report order.
pub fn format_record(record: &StockRecord) -> Vec<FormattedField> {
    Field::ALL
        .into_iter()
        .map(|field| format_field(record, field))
        .collect()
}
