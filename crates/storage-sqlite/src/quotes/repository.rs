//! SQLite repository for latest-quote records.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use log::debug;

use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::quotes::model::LatestQuoteDB;
use crate::schema::latest_quotes::dsl as latest_quotes_dsl;
use quotedock_core::errors::{Error, Result};
use quotedock_core::quotes::{LatestQuoteRecord, QuoteStore};

/// Diesel-backed implementation of the latest-quote store.
///
/// `replace_into` on the symbol primary key gives the one-record-per-symbol,
/// last-write-wins semantics the store contract requires. Writes run on the
/// blocking pool so they never stall the async runtime.
pub struct LatestQuoteRepository {
    pool: Arc<DbPool>,
}

impl LatestQuoteRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuoteStore for LatestQuoteRepository {
    async fn upsert(&self, record: &LatestQuoteRecord) -> Result<()> {
        let row = LatestQuoteDB::try_from(record)?;
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || -> Result<()> {
            let mut conn = get_connection(&pool)?;
            debug!("Upserting latest quote for {}", row.symbol);
            diesel::replace_into(latest_quotes_dsl::latest_quotes)
                .values(&row)
                .execute(&mut conn)
                .map_err(StorageError::QueryFailed)?;
            Ok(())
        })
        .await
        .map_err(|e| Error::Unexpected(format!("storage task failed: {}", e)))?
    }
}
