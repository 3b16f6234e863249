//! Accounts module - identity store models, services, and traits.

mod accounts_model;
mod accounts_service;
mod accounts_traits;
mod credentials;


// Re-export the public interface
pub use accounts_model::{validate_credentials, Account};
pub use accounts_service::AccountService;
pub use accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
pub use credentials::{CredentialChecker, PlaintextCredentialChecker};
