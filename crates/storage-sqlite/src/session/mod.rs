//! SQLite storage implementation for the session snapshot.

mod repository;

pub use repository::SessionRepository;
