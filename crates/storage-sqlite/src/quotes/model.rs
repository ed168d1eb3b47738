//! Database model for latest-quote records.

use chrono::Utc;
use diesel::prelude::*;

use crate::errors::StorageError;
use quotedock_core::quotes::LatestQuoteRecord;

/// Database row for the `latest_quotes` table.
///
/// The quote payload is stored as a JSON document in the upstream wire
/// shape, so the record round-trips without a column per field.
#[derive(Queryable, Identifiable, Selectable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::latest_quotes)]
#[diesel(primary_key(symbol))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LatestQuoteDB {
    pub symbol: String,
    pub currency: String,
    pub quote: String,
    pub updated_at: String,
}

impl TryFrom<&LatestQuoteRecord> for LatestQuoteDB {
    type Error = StorageError;

    fn try_from(record: &LatestQuoteRecord) -> Result<Self, Self::Error> {
        let quote = serde_json::to_string(&record.quote)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        Ok(Self {
            symbol: record.symbol.clone(),
            currency: record.currency.clone(),
            quote,
            updated_at: Utc::now().to_rfc3339(),
        })
    }
}

impl TryFrom<LatestQuoteDB> for LatestQuoteRecord {
    type Error = StorageError;

    fn try_from(row: LatestQuoteDB) -> Result<Self, Self::Error> {
        let quote = serde_json::from_str(&row.quote)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        Ok(Self {
            symbol: row.symbol,
            currency: row.currency,
            quote,
        })
    }
}
