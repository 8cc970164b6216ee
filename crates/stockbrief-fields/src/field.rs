//! The fixed catalog of reported fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a field appears in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Part of the report title
    Title,
    /// "General Information"
    General,
    /// "Technical Information"
    Technical,
}

impl Section {
    /// Sub-heading shown above the section, if it has one.
    pub const fn heading(self) -> Option<&'static str> {
        match self {
            Self::Title => None,
            Self::General => Some("General Information"),
            Self::Technical => Some("Technical Information"),
        }
    }
}

/// One named attribute of a stock.
///
/// Variants are declared in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Company display name
    Name,
    /// Ticker symbol
    Symbol,
    /// Long business description
    BusinessSummary,
    /// Industry
    Industry,
    /// Sector
    Sector,
    /// Country of domicile
    Country,
    /// Last traded price
    CurrentPrice,
    /// Market capitalization
    MarketCap,
    /// Session volume
    Volume,
    /// Average daily volume
    AverageVolume,
    /// Trailing P/E ratio
    TrailingPe,
    /// Forward P/E ratio
    ForwardPe,
    /// Beta
    Beta,
    /// Dividend yield
    DividendYield,
    /// 52-week high
    FiftyTwoWeekHigh,
    /// 52-week low
    FiftyTwoWeekLow,
    /// 200-day moving average
    TwoHundredDayAverage,
    /// 52-week price change
    FiftyTwoWeekChange,
    /// S&P 500 52-week change over the same window
    SAndPFiftyTwoWeekChange,
}

impl Field {
    /// Number of fields in the catalog.
    pub const COUNT: usize = 19;

    /// Every field, in report order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Name,
        Self::Symbol,
        Self::BusinessSummary,
        Self::Industry,
        Self::Sector,
        Self::Country,
        Self::CurrentPrice,
        Self::MarketCap,
        Self::Volume,
        Self::AverageVolume,
        Self::TrailingPe,
        Self::ForwardPe,
        Self::Beta,
        Self::DividendYield,
        Self::FiftyTwoWeekHigh,
        Self::FiftyTwoWeekLow,
        Self::TwoHundredDayAverage,
        Self::FiftyTwoWeekChange,
        Self::SAndPFiftyTwoWeekChange,
    ];

    /// Key of this field in the source's field map.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "longName",
            Self::Symbol => "symbol",
            Self::BusinessSummary => "longBusinessSummary",
            Self::Industry => "industry",
            Self::Sector => "sector",
            Self::Country => "country",
            Self::CurrentPrice => "currentPrice",
            Self::MarketCap => "marketCap",
            Self::Volume => "volume",
            Self::AverageVolume => "averageVolume",
            Self::TrailingPe => "trailingPE",
            Self::ForwardPe => "forwardPE",
            Self::Beta => "beta",
            Self::DividendYield => "yield",
            Self::FiftyTwoWeekHigh => "fiftyTwoWeekHigh",
            Self::FiftyTwoWeekLow => "fiftyTwoWeekLow",
            Self::TwoHundredDayAverage => "twoHundredDayAverage",
            Self::FiftyTwoWeekChange => "52WeekChange",
            Self::SAndPFiftyTwoWeekChange => "SandP52WeekChange",
        }
    }

    /// Snake-case identifier.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Symbol => "symbol",
            Self::BusinessSummary => "business_summary",
            Self::Industry => "industry",
            Self::Sector => "sector",
            Self::Country => "country",
            Self::CurrentPrice => "current_price",
            Self::MarketCap => "market_cap",
            Self::Volume => "volume",
            Self::AverageVolume => "average_volume",
            Self::TrailingPe => "trailing_pe",
            Self::ForwardPe => "forward_pe",
            Self::Beta => "beta",
            Self::DividendYield => "dividend_yield",
            Self::FiftyTwoWeekHigh => "fifty_two_week_high",
            Self::FiftyTwoWeekLow => "fifty_two_week_low",
            Self::TwoHundredDayAverage => "two_hundred_day_average",
            Self::FiftyTwoWeekChange => "fifty_two_week_change",
            Self::SAndPFiftyTwoWeekChange => "s_and_p_fifty_two_week_change",
        }
    }

    /// Label shown in the report.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Symbol => "Symbol",
            Self::BusinessSummary => "Business Summary",
            Self::Industry => "Industry",
            Self::Sector => "Sector",
            Self::Country => "Country",
            Self::CurrentPrice => "Current Price",
            Self::MarketCap => "Market Cap",
            Self::Volume => "Volume",
            Self::AverageVolume => "Average Volume",
            Self::TrailingPe => "Trailing P/E",
            Self::ForwardPe => "Forward P/E",
            Self::Beta => "Beta",
            Self::DividendYield => "Dividend Yield",
            Self::FiftyTwoWeekHigh => "52 Week High",
            Self::FiftyTwoWeekLow => "52 Week Low",
            Self::TwoHundredDayAverage => "200 Day Average",
            Self::FiftyTwoWeekChange => "52 Week Change",
            Self::SAndPFiftyTwoWeekChange => "S&P 500 52 Week Change",
        }
    }

    /// Whether the value is a ratio displayed as a percentage.
    pub const fn is_percentage(self) -> bool {
        matches!(
            self,
            Self::DividendYield | Self::FiftyTwoWeekChange | Self::SAndPFiftyTwoWeekChange
        )
    }

    /// Report section the field belongs to.
    pub const fn section(self) -> Section {
        match self {
            Self::Name | Self::Symbol => Section::Title,
            Self::BusinessSummary | Self::Industry | Self::Sector | Self::Country => {
                Section::General
            }
            _ => Section::Technical,
        }
    }

    /// Position in [`Field::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Fields of `section`, in report order.
    pub fn in_section(section: Section) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |f| f.section() == section)
    }

    /// Look a field up by its source key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
