//! Quote pipeline constants.

/// Currency applied when the upstream omits or blanks one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Default period of the background refresh loop, in seconds.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 300;
