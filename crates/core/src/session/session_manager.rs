use log::{debug, info, warn};
use std::sync::Arc;

use super::session_model::SessionState;
use super::session_traits::SessionRepositoryTrait;
use crate::accounts::Account;
use crate::errors::{Error, Result};

/// Holds the current authenticated account for the life of the application.
///
/// Lifecycle: created from the persisted snapshot by [`SessionManager::restore`],
/// changed only by [`SessionManager::sign_in`] and [`SessionManager::sign_out`].
/// Every transition writes the snapshot before the in-memory state changes,
/// so a failed write leaves the session as it was.
pub struct SessionManager {
    repository: Arc<dyn SessionRepositoryTrait>,
    state: SessionState,
}

impl SessionManager {
    /// Starts in `Anonymous` without consulting storage.
    pub fn new(repository: Arc<dyn SessionRepositoryTrait>) -> Self {
        Self {
            repository,
            state: SessionState::Anonymous,
        }
    }

    /// Restores the session from the persisted snapshot.
    ///
    /// A valid snapshot is trusted as-is, without re-authenticating. A corrupt
    /// snapshot is discarded and the session starts `Anonymous`.
    pub fn restore(repository: Arc<dyn SessionRepositoryTrait>) -> Result<Self> {
        let state = match repository.load() {
            Ok(Some(account)) => {
                info!("Restored session for '{}'", account.username);
                SessionState::Authenticated(account)
            }
            Ok(None) => SessionState::Anonymous,
            Err(Error::Serialization(reason)) => {
                warn!("Discarding corrupt session snapshot: {}", reason);
                repository.clear()?;
                SessionState::Anonymous
            }
            Err(e) => return Err(e),
        };

        Ok(Self { repository, state })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_account(&self) -> Option<&Account> {
        self.state.account()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Returns the current account or `Error::NotAuthenticated`.
    pub fn require_account(&self) -> Result<&Account> {
        self.current_account().ok_or(Error::NotAuthenticated)
    }

    /// Records `account` as the active user and persists its snapshot.
    pub fn sign_in(&mut self, account: Account) -> Result<&Account> {
        self.repository.save(&account)?;
        debug!("Session snapshot written for '{}'", account.username);
        self.state = SessionState::Authenticated(account);
        self.require_account()
    }

    /// Ends the session and erases the persisted snapshot.
    pub fn sign_out(&mut self) -> Result<()> {
        self.repository.clear()?;
        if let SessionState::Authenticated(account) = &self.state {
            info!("Logged out '{}'", account.username);
        }
        self.state = SessionState::Anonymous;
        Ok(())
    }
}
