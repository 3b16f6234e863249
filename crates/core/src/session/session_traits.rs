//! Session snapshot repository trait.

use crate::accounts::Account;
use crate::errors::Result;

/// Persists the snapshot of the logged-in account across restarts.
pub trait SessionRepositoryTrait: Send + Sync {
    /// Reads the stored snapshot, if any.
    ///
    /// A snapshot that exists but cannot be decoded is an
    /// `Error::Serialization`.
    fn load(&self) -> Result<Option<Account>>;

    /// Replaces the stored snapshot.
    fn save(&self, account: &Account) -> Result<()>;

    /// Erases the stored snapshot. Clearing an absent snapshot is not an error.
    fn clear(&self) -> Result<()>;
}
