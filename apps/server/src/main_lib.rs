use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use quotedock_core::quotes::{QuoteService, QuoteServiceTrait};
use quotedock_market_data::provider::{AlpacaConfig, AlpacaProvider};
use quotedock_storage_sqlite::{db, LatestQuoteRepository};

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait>,
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let pool = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);

    let store = Arc::new(LatestQuoteRepository::new(pool));
    let provider = Arc::new(AlpacaProvider::new(AlpacaConfig {
        base_url: config.alpaca_base_url.clone(),
        api_key: config.alpaca_api_key.clone(),
        api_secret: config.alpaca_api_secret.clone(),
        symbols: config.symbols.clone(),
    }));
    let quote_service: Arc<dyn QuoteServiceTrait> = Arc::new(QuoteService::new(provider, store));

    Ok(Arc::new(AppState { quote_service }))
}
