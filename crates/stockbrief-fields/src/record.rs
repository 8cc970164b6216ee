//! Extraction of a [`StockRecord`] from a raw field map.

use crate::field::Field;
use crate::value::FieldValue;
use stockbrief_data::FieldMap;

/// Resolve one field from the raw map.
///
/// Never fails: a missing key and a falsy value both yield
/// [`FieldValue::Absent`].
pub fn extract(fields: &FieldMap, field: Field) -> FieldValue {
    fields
        .get(field.key())
        .map_or(FieldValue::Absent, FieldValue::from_json)
}

/// Every catalog field resolved to a value.
#[derive(Debug, Clone, PartialEq)]
pub struct StockRecord {
    values: [FieldValue; Field::COUNT],
}

impl StockRecord {
    /// A record in which every field is absent.
    pub fn empty() -> Self {
        Self {
            values: std::array::from_fn(|_| FieldValue::Absent),
        }
    }

    /// Resolve every catalog field from `fields`.
    pub fn extract(fields: &FieldMap) -> Self {
        Self {
            values: Field::ALL.map(|field| extract(fields, field)),
        }
    }

    /// Builder-style setter, used when assembling records by hand.
    pub fn with(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        self.values[field.index()] = value.into();
        self
    }

    /// Value of `field`.
    pub const fn get(&self, field: Field) -> &FieldValue {
        &self.values[field.index()]
    }

    /// Fields and values in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        Field::ALL.into_iter().zip(self.values.iter())
    }

    /// The symbol field, when the source provided one as text.
    pub fn symbol(&self) -> Option<&str> {
        self.get(Field::Symbol).as_text()
    }

    /// Number of absent fields.
    pub fn absent_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_absent()).count()
    }
}

impl Default for StockRecord {
    fn default() -> Self {
        Self::empty()
    }
}
