//! Snapshot and trade wire models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Bar, Quote};

/// One executed trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Trade condition codes, in upstream order
    #[serde(rename = "c", default)]
    pub conditions: Vec<String>,
    /// Trade id
    #[serde(rename = "i")]
    pub trade_id: i64,
    /// Trade price
    #[serde(rename = "p")]
    pub price: f64,
    /// Trade size
    #[serde(rename = "s")]
    pub size: i64,
    /// Trade timestamp
    #[serde(rename = "t")]
    pub timestamp: DateTime<Utc>,
    /// Exchange code
    #[serde(rename = "x")]
    pub exchange: String,
    /// Tape identifier
    #[serde(rename = "z")]
    pub tape: String,
}

/// Composite latest-state view for a symbol. Every sub-field can be
/// independently absent upstream; an unknown symbol often comes back as a
/// 200 with an entirely empty body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub symbol: Option<String>,
    #[serde(rename = "dailyBar")]
    pub daily_bar: Option<Bar>,
    #[serde(rename = "prevDailyBar")]
    pub prev_daily_bar: Option<Bar>,
    #[serde(rename = "latestQuote")]
    pub latest_quote: Option<Quote>,
    #[serde(rename = "latestTrade")]
    pub latest_trade: Option<Trade>,
    #[serde(rename = "minuteBar")]
    pub minute_bar: Option<Bar>,
}

impl Snapshot {
    /// True when the upstream returned a body carrying no data at all.
    pub fn is_empty(&self) -> bool {
        self.symbol.is_none()
            && self.daily_bar.is_none()
            && self.prev_daily_bar.is_none()
            && self.latest_quote.is_none()
            && self.latest_trade.is_none()
            && self.minute_bar.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_snapshot_partial_fields() {
        let json = r#"{
            "symbol": "AAPL",
            "latestTrade": {
                "c": ["@"], "i": 52983525029461, "p": 187.15,
                "s": 100, "t": "2024-03-01T20:59:59Z", "x": "V", "z": "C"
            },
            "minuteBar": null
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.symbol.as_deref(), Some("AAPL"));
        assert!(snapshot.daily_bar.is_none());
        assert!(snapshot.minute_bar.is_none());
        let trade = snapshot.latest_trade.unwrap();
        assert_eq!(trade.trade_id, 52983525029461);
        assert_eq!(trade.price, 187.15);
        assert_eq!(trade.exchange, "V");
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_snapshot_with_any_field_is_not_empty() {
        let json = r#"{"symbol": "AAPL"}"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert!(!snapshot.is_empty());
    }
}
