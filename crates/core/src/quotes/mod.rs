//! Quote acquisition and persistence module.
//!
//! - [`model`] - Domain models produced by the validation layer
//! - [`store`] - Storage trait for the latest-quote-per-symbol store
//! - [`service`] - The normalization and validation service
//! - [`constants`] - Pipeline constants
//!
//! # Architecture
//!
//! ```text
//! QuoteService → MarketDataProvider (quotedock-market-data)
//!      ↓
//! QuoteStore (implemented by quotedock-storage-sqlite)
//! ```
//!
//! The service owns all decision logic: precondition checks before any
//! outbound call, defaulting (missing currency → USD), and classification
//! of empty or absent upstream results into the typed taxonomy.

pub mod constants;
pub mod model;
pub mod service;
pub mod store;


pub use model::{BarSeries, LatestQuoteRecord, QuoteSet};
pub use service::{QuoteService, QuoteServiceTrait};
pub use store::QuoteStore;
