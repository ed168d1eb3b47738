//! Environment-driven server configuration.
//!
//! All configuration is read once at startup; nothing looks at the
//! environment afterwards. The resulting struct is passed into the
//! provider and service constructors.

use std::time::Duration;

use quotedock_core::quotes::constants::DEFAULT_REFRESH_INTERVAL_SECS;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DB_PATH: &str = "quotedock.db";
const DEFAULT_BASE_URL: &str = "https://data.alpaca.markets";
const DEFAULT_SYMBOLS: &str = "AAPL,MSFT,GOOG,AMZN,TSLA";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    pub alpaca_base_url: String,
    pub alpaca_api_key: String,
    pub alpaca_api_secret: String,
    /// Predefined symbols for the batch-quote and refresh paths.
    pub symbols: Vec<String>,
    pub refresh_interval: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let listen_addr = env_or("QD_LISTEN_ADDR", DEFAULT_LISTEN_ADDR);
        let db_path = env_or("QD_DB_PATH", DEFAULT_DB_PATH);
        let alpaca_base_url = env_or("ALPACA_BASE_URL", DEFAULT_BASE_URL);
        let alpaca_api_key = require("ALPACA_API_KEY")?;
        let alpaca_api_secret = require("ALPACA_API_SECRET")?;

        let symbols = parse_symbols(&env_or("QD_SYMBOLS", DEFAULT_SYMBOLS));
        anyhow::ensure!(!symbols.is_empty(), "QD_SYMBOLS must name at least one symbol");

        let refresh_secs = match std::env::var("QD_REFRESH_INTERVAL_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("QD_REFRESH_INTERVAL_SECS must be an integer"))?,
            Err(_) => DEFAULT_REFRESH_INTERVAL_SECS,
        };
        anyhow::ensure!(refresh_secs > 0, "QD_REFRESH_INTERVAL_SECS must be positive");

        Ok(Self {
            listen_addr,
            db_path,
            alpaca_base_url,
            alpaca_api_key,
            alpaca_api_secret,
            symbols,
            refresh_interval: Duration::from_secs(refresh_secs),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn require(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("{} must be set", key))
}

fn parse_symbols(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
