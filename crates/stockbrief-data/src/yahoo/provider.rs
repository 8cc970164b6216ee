//! HTTP client for the Yahoo Finance quote summary endpoint.

use super::summary::{SUMMARY_MODULES, parse_quote_summary};
use crate::error::{DataError, Result};
use crate::source::{FieldSource, QuoteSummary, validate_symbol};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

/// User agent sent when none is configured. Yahoo rejects the reqwest default.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)";

/// Endpoints and client settings for [`YahooInfoProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YahooConfig {
    /// Page visited first to obtain the session cookie
    pub cookie_url: String,
    /// Endpoint returning the crumb for the current session
    pub crumb_url: String,
    /// `quoteSummary` endpoint; the symbol is appended as a path segment
    pub summary_url: String,
    /// User agent header
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            cookie_url: "https://fc.yahoo.com".to_string(),
            crumb_url: "https://query1.finance.yahoo.com/v1/test/getcrumb".to_string(),
            summary_url: "https://query2.finance.yahoo.com/v10/finance/quoteSummary".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl YahooConfig {
    /// Point every endpoint at `base_url`, keeping Yahoo's paths.
    ///
    /// Useful for mirrors and local test servers.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            cookie_url: format!("{base}/"),
            crumb_url: format!("{base}/v1/test/getcrumb"),
            summary_url: format!("{base}/v10/finance/quoteSummary"),
            ..Self::default()
        }
    }

    /// Override the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the request timeout.
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Yahoo Finance quote summary provider.
#[derive(Debug)]
pub struct YahooInfoProvider {
    client: reqwest::Client,
    config: YahooConfig,
}

impl YahooInfoProvider {
    /// Create a provider against the public Yahoo endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_config(YahooConfig::default())
    }

    /// Create a provider with custom endpoints and client settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_config(config: YahooConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .cookie_store(true)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Active configuration.
    pub const fn config(&self) -> &YahooConfig {
        &self.config
    }

    /// Visit the cookie page so the session carries Yahoo's consent cookie.
    ///
    /// The page answers with an error status even when it sets the cookie, so
    /// only transport failures are reported, and only as warnings.
    async fn prime_session(&self) {
        match self.client.get(&self.config.cookie_url).send().await {
            Ok(response) => debug!(status = %response.status(), "Primed Yahoo session"),
            Err(e) => warn!(error = %e, "Failed to prime Yahoo session cookie"),
        }
    }

    async fn fetch_crumb(&self) -> Result<String> {
        let response = self.client.get(&self.config.crumb_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Crumb(format!("HTTP {status}")));
        }

        let crumb = response.text().await?.trim().to_string();
        if crumb.is_empty() || crumb.contains('<') || crumb.contains(char::is_whitespace) {
            return Err(DataError::Crumb(format!("unexpected crumb {crumb:?}")));
        }
        Ok(crumb)
    }
}

#[async_trait]
impl FieldSource for YahooInfoProvider {
    fn name(&self) -> &str {
        "yahoo"
    }

    async fn fetch_summary(&self, symbol: &str) -> Result<QuoteSummary> {
        let symbol = validate_symbol(symbol)?;

        self.prime_session().await;
        let crumb = self.fetch_crumb().await?;

        let url = format!(
            "{}/{}",
            self.config.summary_url.trim_end_matches('/'),
            symbol
        );
        debug!(%url, "Requesting quote summary");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("modules", SUMMARY_MODULES.join(",")),
                ("crumb", crumb),
            ])
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() && status != StatusCode::NOT_FOUND {
            return Err(DataError::Http {
                status: status.as_u16(),
                url,
            });
        }

        // A 404 normally carries a "Not Found" payload, but not always a JSON one.
        match parse_quote_summary(&symbol, &body) {
            Err(DataError::Serialization(_)) if status == StatusCode::NOT_FOUND => {
                Err(DataError::SymbolNotFound(symbol))
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_yahoo() {
        let config = YahooConfig::default();
        assert!(config.summary_url.contains("finance.yahoo.com"));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_with_base_url() {
        let config = YahooConfig::with_base_url("http://127.0.0.1:8080/")
            .user_agent("stockbrief-test")
            .timeout(Duration::from_secs(5));

        assert_eq!(config.cookie_url, "http://127.0.0.1:8080/");
        assert_eq!(config.crumb_url, "http://127.0.0.1:8080/v1/test/getcrumb");
        assert_eq!(
            config.summary_url,
            "http://127.0.0.1:8080/v10/finance/quoteSummary"
        );
        assert_eq!(config.user_agent, "stockbrief-test");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_invalid_symbol_short_circuits() {
        let provider = YahooInfoProvider::with_config(YahooConfig::with_base_url(
            "http://127.0.0.1:9",
        ))
        .unwrap();
        let result = provider.fetch_summary("").await;
        assert!(matches!(result, Err(DataError::InvalidSymbol(_))));
    }
}
