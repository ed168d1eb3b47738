//! SQLite storage for the latest-quote store.

mod model;
mod repository;

pub use model::LatestQuoteDB;
pub use repository::LatestQuoteRepository;
