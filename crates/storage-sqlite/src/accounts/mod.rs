//! SQLite storage implementation for accounts.

mod repository;

pub use repository::AccountRepository;
