//! SQLite storage implementation for Prime Toys.
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. It implements the repository traits defined in `primetoys-core` on
//! top of a single key-value table whose values are JSON documents:
//!
//! ```text
//! accounts          -> [Account, ...]
//! stocks:<ownerId>  -> [StockRecord, ...]
//! session           -> Account
//! ```

pub mod accounts;
pub mod config;
pub mod context;
pub mod db;
pub mod errors;
pub mod kv;
pub mod schema;
pub mod session;
pub mod stocks;

pub use accounts::AccountRepository;
pub use config::StorageConfig;
pub use context::open_inventory_app;
pub use db::{
    create_pool, get_connection, init, run_migrations, DbConnection, DbPool,
    DbTransactionExecutor,
};
pub use errors::{IntoCore, StorageError};
pub use session::SessionRepository;
pub use stocks::StockRepository;

// Re-export from primetoys-core for convenience
pub use primetoys_core::errors::{DatabaseError, Error, Result};
