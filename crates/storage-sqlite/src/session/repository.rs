use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::kv::{delete_value, load_value, store_value};
use primetoys_core::accounts::Account;
use primetoys_core::constants::SESSION_KEY;
use primetoys_core::errors::Result;
use primetoys_core::session::SessionRepositoryTrait;

/// Repository for the logged-in account snapshot stored under `session`
pub struct SessionRepository {
    pool: Arc<DbPool>,
}

impl SessionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl SessionRepositoryTrait for SessionRepository {
    fn load(&self) -> Result<Option<Account>> {
        let mut conn = get_connection(&self.pool)?;
        match load_value(&mut conn, SESSION_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, account: &Account) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        store_value(&mut conn, SESSION_KEY, &serde_json::to_string(account)?)
    }

    fn clear(&self) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        delete_value(&mut conn, SESSION_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use crate::db;
    use primetoys_core::Error;
    use tempfile::tempdir;

    fn setup() -> (Arc<DbPool>, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = db::init(&StorageConfig::new(temp_dir.path())).unwrap();
        let pool = db::create_pool(&db_path).unwrap();
        db::run_migrations(&pool).unwrap();
        (pool, temp_dir)
    }

    #[test]
    fn test_save_load_clear() {
        let (pool, _dir) = setup();
        let repo = SessionRepository::new(pool);
        let alice = Account::new("alice", "pw1");

        assert_eq!(repo.load().unwrap(), None);
        repo.save(&alice).unwrap();
        assert_eq!(repo.load().unwrap(), Some(alice.clone()));

        let bob = Account::new("bob", "pw2");
        repo.save(&bob).unwrap();
        assert_eq!(repo.load().unwrap(), Some(bob));

        repo.clear().unwrap();
        assert_eq!(repo.load().unwrap(), None);
        repo.clear().unwrap();
    }

    #[test]
    fn test_corrupt_snapshot_is_a_serialization_error() {
        let (pool, _dir) = setup();
        store_value(&mut db::get_connection(&pool).unwrap(), SESSION_KEY, "{broken").unwrap();
        let repo = SessionRepository::new(pool);

        assert!(matches!(repo.load(), Err(Error::Serialization(_))));
    }
}
