//! SQLite storage implementation for stock records.

mod repository;

pub use repository::StockRepository;
