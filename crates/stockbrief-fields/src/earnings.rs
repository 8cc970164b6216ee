//! Earnings growth
//!
//! Compares the most recent yearly earnings against every earlier year.

use crate::format::{ABSENT_DISPLAY, format_percentage};
use serde::{Deserialize, Serialize};
use stockbrief_data::YearlyEarnings;

/// Growth of the latest earnings relative to one earlier year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarningsGrowth {
    /// Baseline year
    pub since_year: i32,
    /// Growth as a ratio, `None` when the baseline is zero
    pub growth: Option<f64>,
}

impl EarningsGrowth {
    /// Growth rendered as a percentage, or `None`.
    pub fn display(&self) -> String {
        self.growth
            .map_or_else(|| ABSENT_DISPLAY.to_string(), format_percentage)
    }
}

/// Growth from `base` to `latest`.
///
/// The sign is flipped for a loss-making (or zero) baseline so that moving from
/// a loss to a profit reads as positive growth. A zero baseline has no defined
/// ratio and yields `None`.
pub fn growth_between(base: f64, latest: f64) -> Option<f64> {
    if base == 0.0 {
        return None;
    }
    let growth = (latest - base) / base;
    Some(if base <= 0.0 { -growth } else { growth })
}

/// Growth of the last entry of `history` relative to each earlier entry.
///
/// `history` must be ordered oldest first. Fewer than two entries produce no
/// growth figures.
pub fn earnings_growth(history: &[YearlyEarnings]) -> Vec<EarningsGrowth> {
    let Some((latest, earlier)) = history.split_last() else {
        return Vec::new();
    };

    earlier
        .iter()
        .map(|entry| EarningsGrowth {
            since_year: entry.year,
            growth: growth_between(entry.earnings, latest.earnings),
        })
        .collect()
}
