use crate::accounts::Account;

/// Who is using the application right now.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(Account),
}

impl SessionState {
    pub fn account(&self) -> Option<&Account> {
        match self {
            SessionState::Anonymous => None,
            SessionState::Authenticated(account) => Some(account),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}
