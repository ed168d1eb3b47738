//! Core error types for QuoteDock.
//!
//! This module defines the failure taxonomy for the quote pipeline plus a
//! database-agnostic error shape. Storage-specific errors (Diesel, r2d2)
//! are converted to these types by the storage layer.

use thiserror::Error;

use quotedock_market_data::errors::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure taxonomy for quote operations.
///
/// The first four variants are client-input-class: the service raises them
/// before or after the upstream call based on validation rules, and they
/// are never retried. The rest are server-class.
#[derive(Error, Debug)]
pub enum Error {
    /// Blank symbol input, or the upstream returned no usable
    /// quote/snapshot/quote-set for a valid-looking request.
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Blank timeframe input.
    #[error("Unsupported timeframe: {0}")]
    UnsupportedTimeframe(String),

    /// Blank start or end date input.
    #[error("Missing required parameter: {0}")]
    MissingRequiredParameter(String),

    /// The upstream answered with a structurally valid but empty result —
    /// "no data for range", distinct from an invalid symbol.
    #[error("Empty response: {0}")]
    EmptyResponse(String),

    /// The gateway call failed: transport, HTTP status, or decode.
    #[error("Upstream call failed: {0}")]
    Upstream(#[from] MarketDataError),

    /// A persistence operation failed.
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    /// Anything not covered above; callers map this to a generic
    /// server-class response without leaking detail.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// Uses `String` for all detail so the storage layer can convert
/// driver-specific errors into this shape.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or use the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// A record payload could not be serialized or deserialized.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}
