use log::{debug, warn};
use std::sync::Arc;

use super::accounts_model::{validate_credentials, Account};
use super::accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
use super::credentials::{CredentialChecker, PlaintextCredentialChecker};
use crate::errors::{Error, Result};

/// Service for registering and authenticating accounts
pub struct AccountService {
    repository: Arc<dyn AccountRepositoryTrait>,
    credential_checker: Arc<dyn CredentialChecker>,
}

impl AccountService {
    /// Creates a new AccountService instance
    pub fn new(
        repository: Arc<dyn AccountRepositoryTrait>,
        credential_checker: Arc<dyn CredentialChecker>,
    ) -> Self {
        Self {
            repository,
            credential_checker,
        }
    }

    /// Creates an AccountService that stores passwords as plaintext
    pub fn with_plaintext_credentials(repository: Arc<dyn AccountRepositoryTrait>) -> Self {
        Self::new(repository, Arc::new(PlaintextCredentialChecker))
    }
}

impl AccountServiceTrait for AccountService {
    fn list_accounts(&self) -> Result<Vec<Account>> {
        self.repository.list()
    }

    fn register(&self, username: &str, password: &str) -> Result<Account> {
        validate_credentials(username, password)?;

        let accounts = self.repository.list()?;
        if accounts.iter().any(|a| a.username == username) {
            debug!("Signup rejected, username '{}' already exists", username);
            return Err(Error::DuplicateUsername(username.to_string()));
        }

        let account = Account::new(username, self.credential_checker.seal(password));
        debug!("Creating account '{}' with id {}", username, account.id);
        self.repository.create(account)
    }

    fn authenticate(&self, username: &str, password: &str) -> Result<Account> {
        validate_credentials(username, password)?;

        self.repository
            .list()?
            .into_iter()
            .find(|a| a.username == username && self.credential_checker.verify(a, password))
            .ok_or_else(|| {
                warn!("Failed login attempt for username '{}'", username);
                Error::InvalidCredentials
            })
    }
}
