//! Error types for the provider gateway.

use thiserror::Error;

/// Failures surfaced by the provider gateway.
///
/// The gateway reports exactly what went wrong with the outbound call and
/// nothing more; it never retries and never inspects response content.
/// Every variant is a server-class failure from the caller's point of view.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// Transport-level failure: connect, TLS, timeout, or reading the body.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("Provider error: {provider} - HTTP {status}")]
    Status {
        /// The provider that returned the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The body could not be parsed into the expected shape.
    #[error("Decode error: {provider} - {message}")]
    Decode {
        /// The provider whose response failed to parse
        provider: String,
        /// The parse error detail
        message: String,
    },
}
