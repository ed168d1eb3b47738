//! Alpaca data API provider implementation.
//!
//! # API Endpoints
//!
//! - Latest quote: `{base}/v2/stocks/{symbol}/quotes/latest`
//! - Latest quotes: `{base}/v2/stocks/quotes/latest?symbols=A,B,C`
//! - Snapshot: `{base}/v2/stocks/{symbol}/snapshot`
//! - Historical bars: `{base}/v2/stocks/{symbol}/bars?timeframe=&start=&end=`
//!
//! Every call carries the two credential headers and `Accept:
//! application/json`.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::errors::MarketDataError;
use crate::models::{HistoricalBarsResponse, LatestQuoteResponse, LatestQuotesResponse, Snapshot};
use crate::provider::MarketDataProvider;

const PROVIDER_ID: &str = "ALPACA";

const API_KEY_HEADER: &str = "APCA-API-KEY-ID";
const API_SECRET_HEADER: &str = "APCA-API-SECRET-KEY";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the Alpaca data API, constructed once at startup
/// and injected into the provider. Nothing here is read from the ambient
/// environment.
#[derive(Debug, Clone)]
pub struct AlpacaConfig {
    /// Base URL, e.g. `https://data.alpaca.markets`
    pub base_url: String,
    pub api_key: String,
    pub api_secret: String,
    /// Predefined symbols fetched by the batch-quote operation.
    pub symbols: Vec<String>,
}

/// Provider gateway for the Alpaca data API.
pub struct AlpacaProvider {
    client: Client,
    config: AlpacaConfig,
}

impl AlpacaProvider {
    pub fn new(config: AlpacaConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    fn latest_quote_url(&self, symbol: &str) -> String {
        format!("{}/v2/stocks/{}/quotes/latest", self.config.base_url, symbol)
    }

    fn latest_quotes_url(&self) -> String {
        format!("{}/v2/stocks/quotes/latest", self.config.base_url)
    }

    fn snapshot_url(&self, symbol: &str) -> String {
        format!("{}/v2/stocks/{}/snapshot", self.config.base_url, symbol)
    }

    fn bars_url(&self, symbol: &str) -> String {
        format!("{}/v2/stocks/{}/bars", self.config.base_url, symbol)
    }

    fn request(&self, url: &str) -> RequestBuilder {
        self.client
            .get(url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(API_SECRET_HEADER, &self.config.api_secret)
            .header(ACCEPT, "application/json")
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, MarketDataError> {
        let response = request.send().await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(MarketDataError::Status {
                provider: PROVIDER_ID.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| MarketDataError::Decode {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl MarketDataProvider for AlpacaProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_quote(&self, symbol: &str) -> Result<LatestQuoteResponse, MarketDataError> {
        let url = self.latest_quote_url(symbol);
        debug!("Fetching latest quote: {}", url);
        self.send(self.request(&url)).await
    }

    async fn latest_quotes(&self) -> Result<LatestQuotesResponse, MarketDataError> {
        let url = self.latest_quotes_url();
        let symbols = self.config.symbols.join(",");
        debug!("Fetching latest quotes for {}", symbols);
        self.send(self.request(&url).query(&[("symbols", symbols.as_str())]))
            .await
    }

    async fn snapshot(&self, symbol: &str) -> Result<Snapshot, MarketDataError> {
        let url = self.snapshot_url(symbol);
        debug!("Fetching snapshot: {}", url);
        self.send(self.request(&url)).await
    }

    async fn historical_bars(
        &self,
        symbol: &str,
        timeframe: &str,
        start: &str,
        end: &str,
    ) -> Result<HistoricalBarsResponse, MarketDataError> {
        let url = self.bars_url(symbol);
        debug!(
            "Fetching historical bars: {} timeframe={} start={} end={}",
            url, timeframe, start, end
        );
        self.send(
            self.request(&url)
                .query(&[("timeframe", timeframe), ("start", start), ("end", end)]),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> AlpacaProvider {
        AlpacaProvider::new(AlpacaConfig {
            base_url: "https://data.alpaca.markets".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            symbols: vec!["AAPL".to_string(), "MSFT".to_string()],
        })
    }

    #[test]
    fn test_latest_quote_url() {
        assert_eq!(
            provider().latest_quote_url("AAPL"),
            "https://data.alpaca.markets/v2/stocks/AAPL/quotes/latest"
        );
    }

    #[test]
    fn test_latest_quotes_url() {
        assert_eq!(
            provider().latest_quotes_url(),
            "https://data.alpaca.markets/v2/stocks/quotes/latest"
        );
    }

    #[test]
    fn test_snapshot_and_bars_urls() {
        let provider = provider();
        assert_eq!(
            provider.snapshot_url("TSLA"),
            "https://data.alpaca.markets/v2/stocks/TSLA/snapshot"
        );
        assert_eq!(
            provider.bars_url("TSLA"),
            "https://data.alpaca.markets/v2/stocks/TSLA/bars"
        );
    }

    #[test]
    fn test_configured_symbols_join_as_query_value() {
        assert_eq!(provider().config.symbols.join(","), "AAPL,MSFT");
    }

    #[test]
    fn test_provider_id() {
        assert_eq!(provider().id(), "ALPACA");
    }
}
