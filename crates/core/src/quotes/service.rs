//! Quote normalization and validation service.
//!
//! Wraps the provider gateway with precondition checks, defaulting rules,
//! and failure classification. Blank-parameter checks always precede the
//! outbound call, so malformed input never produces a network round-trip.

use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};

use quotedock_market_data::models::{Quote, Snapshot};
use quotedock_market_data::provider::MarketDataProvider;

use super::constants::DEFAULT_CURRENCY;
use super::model::{BarSeries, LatestQuoteRecord, QuoteSet};
use super::store::QuoteStore;
use crate::errors::{Error, Result};

/// Operations exposed to the inbound surface and the refresh loop.
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Fetch the latest quotes for the configured symbol list,
    /// currency-normalized.
    async fn fetch_all_quotes(&self) -> Result<QuoteSet>;

    /// Fetch the latest quote for one symbol.
    async fn fetch_quote_by_symbol(&self, symbol: &str) -> Result<Quote>;

    /// Fetch the composite snapshot for one symbol. Sub-fields are not
    /// individually validated; only a completely empty snapshot fails.
    async fn fetch_snapshot(&self, symbol: &str) -> Result<Snapshot>;

    /// Fetch historical bars for one symbol over a timeframe and range.
    async fn fetch_historical_bars(
        &self,
        symbol: &str,
        timeframe: &str,
        start: &str,
        end: &str,
    ) -> Result<BarSeries>;

    /// Fetch all quotes and upsert one record per symbol. Returns the
    /// number of records written.
    async fn save_all_quotes(&self) -> Result<usize>;
}

/// The normalization service. Holds no state beyond its collaborators;
/// every invocation is independent.
pub struct QuoteService {
    provider: Arc<dyn MarketDataProvider>,
    store: Arc<dyn QuoteStore>,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, store: Arc<dyn QuoteStore>) -> Self {
        Self { provider, store }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn fetch_all_quotes(&self) -> Result<QuoteSet> {
        info!("Fetching latest quotes for the configured symbol list");
        let response = self.provider.latest_quotes().await?;

        let currency = match response.currency {
            Some(currency) if !is_blank(&currency) => currency,
            _ => {
                warn!(
                    "Currency in the response was absent or blank, defaulting to {}",
                    DEFAULT_CURRENCY
                );
                DEFAULT_CURRENCY.to_string()
            }
        };

        if response.quotes.is_empty() {
            return Err(Error::InvalidSymbol(
                "no quotes found for the configured symbols".to_string(),
            ));
        }

        info!(
            "Fetched {} quotes with currency {}",
            response.quotes.len(),
            currency
        );

        Ok(QuoteSet {
            currency,
            quotes: response.quotes,
        })
    }

    async fn fetch_quote_by_symbol(&self, symbol: &str) -> Result<Quote> {
        if is_blank(symbol) {
            return Err(Error::InvalidSymbol("symbol cannot be blank".to_string()));
        }

        info!("Fetching quote for symbol {}", symbol);
        let response = self.provider.latest_quote(symbol).await?;

        response
            .quote
            .ok_or_else(|| Error::InvalidSymbol(format!("no quote found for symbol {}", symbol)))
    }

    async fn fetch_snapshot(&self, symbol: &str) -> Result<Snapshot> {
        if is_blank(symbol) {
            return Err(Error::InvalidSymbol("symbol cannot be blank".to_string()));
        }

        info!("Fetching snapshot for symbol {}", symbol);
        let snapshot = self.provider.snapshot(symbol).await?;

        if snapshot.is_empty() {
            return Err(Error::InvalidSymbol(format!(
                "no snapshot data found for symbol {}",
                symbol
            )));
        }

        Ok(snapshot)
    }

    async fn fetch_historical_bars(
        &self,
        symbol: &str,
        timeframe: &str,
        start: &str,
        end: &str,
    ) -> Result<BarSeries> {
        if is_blank(symbol) {
            return Err(Error::InvalidSymbol("symbol cannot be blank".to_string()));
        }
        if is_blank(timeframe) {
            return Err(Error::UnsupportedTimeframe(
                "timeframe cannot be blank".to_string(),
            ));
        }
        if is_blank(start) || is_blank(end) {
            return Err(Error::MissingRequiredParameter(
                "start and end dates cannot be blank".to_string(),
            ));
        }

        info!(
            "Fetching historical bars for symbol {} timeframe {} from {} to {}",
            symbol, timeframe, start, end
        );
        let response = self
            .provider
            .historical_bars(symbol, timeframe, start, end)
            .await?;

        if response.bars.is_empty() {
            return Err(Error::EmptyResponse(format!(
                "no historical bars found for symbol {}",
                symbol
            )));
        }

        Ok(BarSeries {
            symbol: symbol.to_string(),
            bars: response.bars,
        })
    }

    async fn save_all_quotes(&self) -> Result<usize> {
        let quote_set = self.fetch_all_quotes().await?;
        info!("Saving {} latest quotes", quote_set.quotes.len());

        let mut saved = 0;
        for (symbol, quote) in &quote_set.quotes {
            let record = LatestQuoteRecord {
                symbol: symbol.clone(),
                currency: quote_set.currency.clone(),
                quote: quote.clone(),
            };
            self.store.upsert(&record).await?;
            saved += 1;
        }

        info!("Saved {} latest quotes", saved);
        Ok(saved)
    }
}
