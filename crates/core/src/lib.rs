//! Core domain logic for QuoteDock.
//!
//! This crate owns the normalization and validation layer: it wraps the
//! provider gateway with precondition checks, defaulting rules, and a typed
//! failure taxonomy, and defines the persistence trait the storage crate
//! implements. It is database-agnostic and transport-agnostic; Diesel and
//! axum types never appear here.

pub mod errors;
pub mod quotes;

pub use errors::{DatabaseError, Error, Result};
