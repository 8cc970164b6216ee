//! Parsing of the v10 `quoteSummary` payload.
//!
//! Yahoo splits company information across several modules and wraps most
//! numbers as `{"raw": 1.2, "fmt": "1.20"}`. This module flattens the modules
//! into a single [`FieldMap`] and pulls the yearly earnings series out of the
//! `earnings` module.

use crate::error::{DataError, Result};
use crate::source::{FieldMap, QuoteSummary, YearlyEarnings};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Modules requested from the `quoteSummary` endpoint.
pub const SUMMARY_MODULES: &[&str] = &[
    "quoteType",
    "price",
    "summaryProfile",
    "assetProfile",
    "summaryDetail",
    "defaultKeyStatistics",
    "financialData",
    "earnings",
];

/// Modules merged into the flat field map, in precedence order.
const FLATTENED_MODULES: &[&str] = &[
    "quoteType",
    "price",
    "summaryProfile",
    "assetProfile",
    "summaryDetail",
    "defaultKeyStatistics",
    "financialData",
];

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: Body,
}

#[derive(Debug, Deserialize)]
struct Body {
    #[serde(default)]
    result: Option<Vec<Value>>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    #[serde(default)]
    description: String,
}

/// Parse a `quoteSummary` response body for `symbol`.
///
/// # Errors
///
/// Returns [`DataError::SymbolNotFound`] for Yahoo's "Not Found" error or an
/// empty result, [`DataError::YahooApi`] for any other reported error, and
/// [`DataError::Serialization`] when the body is not a summary payload.
pub fn parse_quote_summary(symbol: &str, body: &str) -> Result<QuoteSummary> {
    let envelope: Envelope = serde_json::from_str(body)?;

    if let Some(error) = envelope.quote_summary.error {
        if error.code.eq_ignore_ascii_case("Not Found") {
            return Err(DataError::SymbolNotFound(symbol.to_string()));
        }
        return Err(DataError::YahooApi {
            code: error.code,
            description: error.description,
        });
    }

    let result = envelope
        .quote_summary
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| DataError::SymbolNotFound(symbol.to_string()))?;

    let fields = flatten_modules(&result);
    debug!(symbol, keys = fields.len(), "Flattened quote summary modules");

    Ok(QuoteSummary::new(symbol, fields).with_yearly_earnings(yearly_earnings(&result)))
}

/// Merge the scalar entries of every known module into one map.
///
/// The first module providing a usable value for a key wins. Zero, `false`
/// and empty strings count as unusable, so a placeholder `{"raw": 0}` in an
/// earlier module does not hide a real value from a later one.
pub(crate) fn flatten_modules(result: &Value) -> FieldMap {
    let mut fields = FieldMap::new();

    for module in FLATTENED_MODULES {
        let Some(Value::Object(entries)) = result.get(*module) else {
            continue;
        };
        for (key, value) in entries {
            if key == "maxAge" || fields.contains_key(key) {
                continue;
            }
            if let Some(value) = unwrap_value(value).filter(|v| !is_placeholder(v)) {
                fields.insert(key.clone(), value);
            }
        }
    }

    fields
}

/// Strip Yahoo's `{raw, fmt}` wrapper.
///
/// Returns `None` for nulls, empty wrappers, lists and nested objects so that
/// later modules may still provide the key.
fn unwrap_value(value: &Value) -> Option<Value> {
    match value {
        Value::Null | Value::Array(_) => None,
        Value::Object(wrapper) => wrapper
            .get("raw")
            .or_else(|| wrapper.get("fmt"))
            .filter(|inner| !inner.is_null())
            .cloned(),
        other => Some(other.clone()),
    }
}

fn is_placeholder(value: &Value) -> bool {
    match value {
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn yearly_earnings(result: &Value) -> Vec<YearlyEarnings> {
    let Some(Value::Array(rows)) = result.pointer("/earnings/financialsChart/yearly") else {
        return Vec::new();
    };

    rows.iter()
        .filter_map(|row| {
            let year = row.get("date").and_then(parse_year);
            let earnings = row
                .get("earnings")
                .and_then(unwrap_value)
                .and_then(|v| v.as_f64());
            match (year, earnings) {
                (Some(year), Some(earnings)) => Some(YearlyEarnings::new(year, earnings)),
                _ => {
                    warn!(%row, "Skipping malformed yearly earnings entry");
                    None
                }
            }
        })
        .collect()
}

fn parse_year(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
