//! Session module - the current authenticated account and its persisted snapshot.

mod session_manager;
mod session_model;
mod session_traits;

pub use session_manager::SessionManager;
pub use session_model::SessionState;
pub use session_traits::SessionRepositoryTrait;
