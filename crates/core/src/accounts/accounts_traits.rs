//! Account repository and service traits.
//!
//! These traits define the contract for account operations without any
//! database-specific types, allowing for different storage implementations.

use super::accounts_model::Account;
use crate::errors::Result;

/// Trait defining the contract for Account repository operations.
///
/// Implementations persist the ordered account collection. The trait is
/// database-agnostic - storage-specific details are handled by concrete
/// implementations.
pub trait AccountRepositoryTrait: Send + Sync {
    /// Lists all accounts in insertion order.
    fn list(&self) -> Result<Vec<Account>>;

    /// Appends a new account to the collection.
    ///
    /// Fails with `Error::DuplicateUsername` if the username is already taken,
    /// leaving the collection untouched.
    fn create(&self, account: Account) -> Result<Account>;
}

/// Trait defining the contract for the identity store.
pub trait AccountServiceTrait: Send + Sync {
    /// Lists all registered accounts in insertion order.
    fn list_accounts(&self) -> Result<Vec<Account>>;

    /// Registers a new account. Usernames are unique (case-sensitive).
    fn register(&self, username: &str, password: &str) -> Result<Account>;

    /// Returns the first account whose username and password both match.
    fn authenticate(&self, username: &str, password: &str) -> Result<Account>;
}
