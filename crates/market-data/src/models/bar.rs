//! Bar wire models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV aggregation interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Open price
    #[serde(rename = "o")]
    pub open: f64,
    /// High price
    #[serde(rename = "h")]
    pub high: f64,
    /// Low price
    #[serde(rename = "l")]
    pub low: f64,
    /// Close price
    #[serde(rename = "c")]
    pub close: f64,
    /// Volume
    #[serde(rename = "v")]
    pub volume: i64,
    /// Number of trades in the interval
    #[serde(rename = "n")]
    pub trade_count: i64,
    /// Volume-weighted average price
    #[serde(rename = "vw")]
    pub vwap: f64,
    /// Interval timestamp
    #[serde(rename = "t")]
    pub timestamp: DateTime<Utc>,
}

/// Envelope for the historical-bars endpoint. The upstream returns bars
/// ascending by timestamp; `bars` defaults to empty when the field is
/// absent so the service layer can treat "no data" uniformly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalBarsResponse {
    pub symbol: Option<String>,
    #[serde(default)]
    pub bars: Vec<Bar>,
    pub next_page_token: Option<String>,
}
