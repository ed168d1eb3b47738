//! Wire models for upstream responses.
//!
//! These structs mirror the upstream JSON exactly, short field names and
//! all, via serde renames. Fields the upstream may omit are `Option` or
//! defaulted so the gateway can forward responses verbatim; deciding what
//! absence means is the service layer's job.

mod bar;
mod quote;
mod snapshot;

pub use bar::{Bar, HistoricalBarsResponse};
pub use quote::{LatestQuoteResponse, LatestQuotesResponse, Quote};
pub use snapshot::{Snapshot, Trade};
