//! Quote wire models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point-in-time bid/ask snapshot for a symbol, exactly as the upstream
/// returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Ask price
    #[serde(rename = "ap")]
    pub ask_price: f64,
    /// Ask size
    #[serde(rename = "as")]
    pub ask_size: i64,
    /// Ask exchange code
    #[serde(rename = "ax")]
    pub ask_exchange: String,
    /// Bid price
    #[serde(rename = "bp")]
    pub bid_price: f64,
    /// Bid size
    #[serde(rename = "bs")]
    pub bid_size: i64,
    /// Bid exchange code
    #[serde(rename = "bx")]
    pub bid_exchange: String,
    /// Trade condition codes, in upstream order
    #[serde(rename = "c", default)]
    pub conditions: Vec<String>,
    /// Quote timestamp
    #[serde(rename = "t")]
    pub timestamp: DateTime<Utc>,
    /// Tape identifier
    #[serde(rename = "z")]
    pub tape: String,
}

/// Envelope for the single-quote endpoint. Either field may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestQuoteResponse {
    pub symbol: Option<String>,
    pub quote: Option<Quote>,
}

/// Envelope for the batch-quotes endpoint. The currency is frequently
/// omitted upstream; the quotes map defaults to empty when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestQuotesResponse {
    pub currency: Option<String>,
    #[serde(default)]
    pub quotes: HashMap<String, Quote>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_quote() {
        let json = r#"{
            "ap": 187.05,
            "as": 2,
            "ax": "V",
            "bp": 187.04,
            "bs": 1,
            "bx": "V",
            "c": ["R"],
            "t": "2024-03-01T16:00:00.029Z",
            "z": "C"
        }"#;
        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.ask_price, 187.05);
        assert_eq!(quote.bid_size, 1);
        assert_eq!(quote.conditions, vec!["R".to_string()]);
        assert_eq!(quote.tape, "C");
    }

    #[test]
    fn test_deserialize_quote_without_conditions() {
        let json = r#"{
            "ap": 187.05,
            "as": 2,
            "ax": "V",
            "bp": 187.04,
            "bs": 1,
            "bx": "V",
            "t": "2024-03-01T16:00:00Z",
            "z": "C"
        }"#;
        let quote: Quote = serde_json::from_str(json).unwrap();
        assert!(quote.conditions.is_empty());
    }

    #[test]
    fn test_deserialize_latest_quote_response_missing_quote() {
        let json = r#"{"symbol": "AAPL"}"#;
        let response: LatestQuoteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.symbol.as_deref(), Some("AAPL"));
        assert!(response.quote.is_none());
    }

    #[test]
    fn test_deserialize_latest_quotes_response() {
        let json = r#"{
            "currency": "USD",
            "quotes": {
                "AAPL": {
                    "ap": 187.05, "as": 2, "ax": "V",
                    "bp": 187.04, "bs": 1, "bx": "V",
                    "c": ["R"], "t": "2024-03-01T16:00:00Z", "z": "C"
                }
            }
        }"#;
        let response: LatestQuotesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.currency.as_deref(), Some("USD"));
        assert_eq!(response.quotes.len(), 1);
        assert!(response.quotes.contains_key("AAPL"));
    }

    #[test]
    fn test_deserialize_latest_quotes_response_null_currency_empty_map() {
        let json = r#"{"currency": null, "quotes": {}}"#;
        let response: LatestQuotesResponse = serde_json::from_str(json).unwrap();
        assert!(response.currency.is_none());
        assert!(response.quotes.is_empty());
    }

    #[test]
    fn test_quote_serializes_to_wire_names() {
        let quote = Quote {
            ask_price: 1.0,
            ask_size: 1,
            ask_exchange: "V".to_string(),
            bid_price: 0.9,
            bid_size: 2,
            bid_exchange: "V".to_string(),
            conditions: vec![],
            timestamp: Utc::now(),
            tape: "A".to_string(),
        };
        let value = serde_json::to_value(&quote).unwrap();
        assert!(value.get("ap").is_some());
        assert!(value.get("bs").is_some());
        assert!(value.get("ask_price").is_none());
    }
}
