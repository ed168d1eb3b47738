//! Market data provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{HistoricalBarsResponse, LatestQuoteResponse, LatestQuotesResponse, Snapshot};

/// Trait for market data providers.
///
/// A provider issues one outbound call per operation and deserializes the
/// body into the wire models, forwarding exactly what the upstream returned
/// (nulls and absent fields included). It carries no retry logic and no
/// content validation; both live in the service layer.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and error payloads.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for one symbol.
    async fn latest_quote(&self, symbol: &str) -> Result<LatestQuoteResponse, MarketDataError>;

    /// Fetch the latest quotes for the configured symbol list.
    async fn latest_quotes(&self) -> Result<LatestQuotesResponse, MarketDataError>;

    /// Fetch the composite snapshot for one symbol.
    async fn snapshot(&self, symbol: &str) -> Result<Snapshot, MarketDataError>;

    /// Fetch historical bars for one symbol over a timeframe and date range.
    ///
    /// `start` and `end` are passed through verbatim; the upstream accepts
    /// both plain dates and RFC-3339 timestamps.
    async fn historical_bars(
        &self,
        symbol: &str,
        timeframe: &str,
        start: &str,
        end: &str,
    ) -> Result<HistoricalBarsResponse, MarketDataError>;
}
