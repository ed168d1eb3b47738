//! Storage trait for the latest-quote store.

use async_trait::async_trait;

use super::model::LatestQuoteRecord;
use crate::errors::Result;

/// Storage interface for latest-quote records.
///
/// Implementations upsert by symbol with last-write-wins semantics. The
/// core pipeline only ever writes; downstream consumers read the store
/// through their own access path.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Insert or overwrite the record for `record.symbol`.
    async fn upsert(&self, record: &LatestQuoteRecord) -> Result<()>;
}
