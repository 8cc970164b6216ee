//! Yahoo Finance quote summary provider.

pub mod provider;
pub mod summary;

pub use provider::{DEFAULT_USER_AGENT, YahooConfig, YahooInfoProvider};
pub use summary::{SUMMARY_MODULES, parse_quote_summary};
