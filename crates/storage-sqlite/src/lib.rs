//! SQLite storage implementation for QuoteDock.
//!
//! This crate provides the database-backed `QuoteStore` using Diesel with
//! SQLite. It contains:
//! - Connection pooling and embedded migrations
//! - The `latest_quotes` schema and its repository
//! - Conversion between storage errors and the core error types
//!
//! This is the only crate with database dependencies; `quotedock-core`
//! works purely against traits.
//!
//! ```text
//!        core (domain)
//!             │
//!             ▼
//!   storage-sqlite (this crate)
//!             │
//!             ▼
//!         SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod quotes;
pub mod schema;

pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};
pub use errors::StorageError;
pub use quotes::LatestQuoteRepository;
