//! Prime Toys Core - domain entities, services, and traits.
//!
//! This crate contains the business logic of the stock manager: the identity
//! store, per-account inventory, stock valuation, session handling and report
//! export. It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod accounts;
pub mod app;
pub mod constants;
pub mod errors;
pub mod export;
pub mod session;
pub mod stocks;
pub mod utils;
pub mod valuation;

pub use app::InventoryApp;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
