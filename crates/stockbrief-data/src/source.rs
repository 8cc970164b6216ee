//! Field sources and the raw data they return.

use crate::error::{DataError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Raw field mapping for one symbol, keyed by upstream field name.
///
/// Values are kept as raw JSON so that the caller decides how to interpret
/// zero, empty, and null entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(BTreeMap<String, Value>);

impl FieldMap {
    /// Create an empty field map.
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Look up a raw value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Insert a raw value, returning the previous one if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Whether the key is present (regardless of its value).
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<String, Value>> for FieldMap {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

/// Net income reported for one fiscal year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyEarnings {
    /// Fiscal year
    pub year: i32,
    /// Earnings for the year
    pub earnings: f64,
}

impl YearlyEarnings {
    /// Create a new yearly earnings entry.
    pub const fn new(year: i32, earnings: f64) -> Self {
        Self { year, earnings }
    }
}

/// Everything a source knows about one symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummary {
    /// Symbol as requested
    pub symbol: String,
    /// Flattened raw fields
    pub fields: FieldMap,
    /// Yearly earnings, oldest first
    pub yearly_earnings: Vec<YearlyEarnings>,
}

impl QuoteSummary {
    /// Create a summary without earnings history.
    pub fn new(symbol: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            symbol: symbol.into(),
            fields,
            yearly_earnings: Vec::new(),
        }
    }

    /// Attach a yearly earnings series. Entries are ordered oldest first.
    pub fn with_yearly_earnings(mut self, mut earnings: Vec<YearlyEarnings>) -> Self {
        earnings.sort_by_key(|e| e.year);
        self.yearly_earnings = earnings;
        self
    }
}

/// A backend able to resolve a ticker symbol into a [`QuoteSummary`].
#[async_trait]
pub trait FieldSource: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// Fetch the summary for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::SymbolNotFound`] when the source cannot resolve the
    /// symbol, or a transport/parse error when the lookup itself fails.
    async fn fetch_summary(&self, symbol: &str) -> Result<QuoteSummary>;
}

/// Trim a user supplied symbol and reject obviously malformed input.
///
/// Accepts letters, digits and the punctuation Yahoo uses in tickers
/// (`.`, `-`, `^`, `=`).
pub fn validate_symbol(symbol: &str) -> Result<String> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
    }
    if let Some(c) = trimmed
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '=')))
    {
        return Err(DataError::InvalidSymbol(format!(
            "unexpected character {c:?} in {trimmed:?}"
        )));
    }
    Ok(trimmed.to_string())
}

/// In-memory source keyed by upper-cased symbol.
#[derive(Debug, Clone, Default)]
pub struct StaticFieldSource {
    summaries: HashMap<String, QuoteSummary>,
}

impl StaticFieldSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a summary under its own symbol.
    pub fn with_summary(mut self, summary: QuoteSummary) -> Self {
        self.summaries
            .insert(summary.symbol.to_ascii_uppercase(), summary);
        self
    }

    /// Register a bare field map for `symbol`.
    pub fn with_fields(self, symbol: &str, fields: FieldMap) -> Self {
        self.with_summary(QuoteSummary::new(symbol, fields))
    }
}

#[async_trait]
impl FieldSource for StaticFieldSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_summary(&self, symbol: &str) -> Result<QuoteSummary> {
        let symbol = validate_symbol(symbol)?;
        self.summaries
            .get(&symbol.to_ascii_uppercase())
            .cloned()
            .ok_or(DataError::SymbolNotFound(symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_field_map_builder() {
        let map = FieldMap::new()
            .with("marketCap", 2_500_000_000_000_i64)
            .with("beta", 1.2)
            .with("country", "United States");

        assert_eq!(map.len(), 3);
        assert_eq!(map.get("beta"), Some(&json!(1.2)));
        assert!(map.contains_key("country"));
        assert!(map.get("yield").is_none());
    }

    #[test]
    fn test_yearly_earnings_are_sorted() {
        let summary = QuoteSummary::new("AAPL", FieldMap::new()).with_yearly_earnings(vec![
            YearlyEarnings::new(2022, 150.0),
            YearlyEarnings::new(2019, 100.0),
            YearlyEarnings::new(2021, 75.0),
        ]);

        let years: Vec<i32> = summary.yearly_earnings.iter().map(|e| e.year).collect();
        assert_eq!(years, vec![2019, 2021, 2022]);
    }

    #[rstest]
    #[case("aapl", "aapl")]
    #[case("  KBWY\n", "KBWY")]
    #[case("BRK-B", "BRK-B")]
    #[case("^GSPC", "^GSPC")]
    #[case("EURUSD=X", "EURUSD=X")]
    fn test_validate_symbol_accepts(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(validate_symbol(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("AA PL")]
    #[case("../etc")]
    fn test_validate_symbol_rejects(#[case] input: &str) {
        assert!(matches!(
            validate_symbol(input),
            Err(DataError::InvalidSymbol(_))
        ));
    }

    #[tokio::test]
    async fn test_static_source_lookup_is_case_insensitive() {
        let source = StaticFieldSource::new()
            .with_fields("AAPL", FieldMap::new().with("symbol", "AAPL"));

        let summary = source.fetch_summary("aapl").await.unwrap();
        assert_eq!(summary.fields.get("symbol"), Some(&json!("AAPL")));
    }

    #[tokio::test]
    async fn test_static_source_unknown_symbol() {
        let source = StaticFieldSource::new();
        let result = source.fetch_summary("NOTREAL").await;
        assert!(matches!(result, Err(DataError::SymbolNotFound(s)) if s == "NOTREAL"));
    }
}
