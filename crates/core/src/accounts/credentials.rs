//! Credential sealing and verification.

use std::sync::Arc;

use super::accounts_model::Account;

/// Strategy for storing and checking account passwords.
///
/// The identity store only talks to this trait, so the stored credential
/// format can change without touching callers.
pub trait CredentialChecker: Send + Sync {
    /// Produces the credential persisted for a newly registered account.
    fn seal(&self, password: &str) -> String;

    /// Checks a login attempt against an account's stored credential.
    fn verify(&self, account: &Account, password: &str) -> bool;
}

/// Stores passwords as given and compares them exactly.
///
/// This is insecure: anyone who can read local storage can read every
/// password. It matches the credential format of existing stores.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextCredentialChecker;

impl CredentialChecker for PlaintextCredentialChecker {
    #[inline]
    fn seal(&self, password: &str) -> String {
        password.to_string()
    }

    #[inline]
    fn verify(&self, account: &Account, password: &str) -> bool {
        account.password == password
    }
}

impl<C: CredentialChecker + ?Sized> CredentialChecker for Arc<C> {
    #[inline]
    fn seal(&self, password: &str) -> String {
        (**self).seal(password)
    }

    #[inline]
    fn verify(&self, account: &Account, password: &str) -> bool {
        (**self).verify(account, password)
    }
}
