//! Domain models produced by the validation layer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use quotedock_market_data::models::{Bar, Quote};

/// A validated batch of latest quotes.
///
/// Invariants: `currency` is never blank (defaulted to USD when the
/// upstream omits it) and `quotes` is non-empty — an empty upstream result
/// is a failure, not a valid empty set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSet {
    pub currency: String,
    pub quotes: HashMap<String, Quote>,
}

/// A validated, non-empty bar series for one symbol, ascending by
/// timestamp at the requested timeframe granularity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarSeries {
    pub symbol: String,
    pub bars: Vec<Bar>,
}

/// The persisted latest-quote record. One record per symbol, overwritten
/// on every save cycle; no history is retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestQuoteRecord {
    pub symbol: String,
    pub currency: String,
    pub quote: Quote,
}
