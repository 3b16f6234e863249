use log::debug;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, DbTransactionExecutor};
use crate::kv::{append_to_collection, load_collection};
use primetoys_core::accounts::{Account, AccountRepositoryTrait};
use primetoys_core::constants::ACCOUNTS_KEY;
use primetoys_core::errors::{Error, Result};

/// Repository for the account collection stored under `accounts`
pub struct AccountRepository {
    pool: Arc<DbPool>,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl AccountRepositoryTrait for AccountRepository {
    fn list(&self) -> Result<Vec<Account>> {
        let mut conn = get_connection(&self.pool)?;
        load_collection(&mut conn, ACCOUNTS_KEY)
    }

    /// Appends the account unless its username is already taken.
    ///
    /// The uniqueness check and the write share one immediate transaction.
    fn create(&self, account: Account) -> Result<Account> {
        self.pool.execute(|conn| {
            let existing: Vec<Account> = load_collection(conn, ACCOUNTS_KEY)?;
            if existing.iter().any(|a| a.username == account.username) {
                return Err(Error::DuplicateUsername(account.username.clone()));
            }
            let count = append_to_collection(conn, ACCOUNTS_KEY, &account)?;
            debug!("Account collection now holds {} entries", count);
            Ok(account)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use crate::db;
    use crate::kv::{load_value, store_value};
    use tempfile::tempdir;

    fn setup() -> (Arc<DbPool>, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = db::init(&StorageConfig::new(temp_dir.path())).unwrap();
        let pool = db::create_pool(&db_path).unwrap();
        db::run_migrations(&pool).unwrap();
        (pool, temp_dir)
    }

    #[test]
    fn test_create_and_list_keep_insertion_order() {
        let (pool, _dir) = setup();
        let repo = AccountRepository::new(pool);

        repo.create(Account::new("zoe", "pw")).unwrap();
        repo.create(Account::new("adam", "pw")).unwrap();

        let names: Vec<String> = repo.list().unwrap().into_iter().map(|a| a.username).collect();
        assert_eq!(names, vec!["zoe", "adam"]);
    }

    #[test]
    fn test_duplicate_username_leaves_collection_untouched() {
        let (pool, _dir) = setup();
        let repo = AccountRepository::new(pool.clone());
        let first = repo.create(Account::new("alice", "pw1")).unwrap();

        let before = load_value(&mut db::get_connection(&pool).unwrap(), ACCOUNTS_KEY).unwrap();
        let result = repo.create(Account::new("alice", "pw2"));

        assert!(matches!(result, Err(Error::DuplicateUsername(ref name)) if name == "alice"));
        let after = load_value(&mut db::get_connection(&pool).unwrap(), ACCOUNTS_KEY).unwrap();
        assert_eq!(before, after);
        assert_eq!(repo.list().unwrap(), vec![first]);
    }

    #[test]
    fn test_accounts_are_stored_as_json_array() {
        let (pool, _dir) = setup();
        let repo = AccountRepository::new(pool.clone());
        let account = repo.create(Account::new("alice", "pw1")).unwrap();

        let raw = load_value(&mut db::get_connection(&pool).unwrap(), ACCOUNTS_KEY)
            .unwrap()
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "id": account.id, "username": "alice", "password": "pw1" }])
        );
    }

    #[test]
    fn test_list_reads_legacy_collection() {
        let (pool, _dir) = setup();
        store_value(
            &mut db::get_connection(&pool).unwrap(),
            ACCOUNTS_KEY,
            r#"[{"id":"1700000000000","username":"bob","password":"x"}]"#,
        )
        .unwrap();
        let repo = AccountRepository::new(pool);

        let accounts = repo.list().unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].id, "1700000000000");
        assert_eq!(accounts[0].username, "bob");
    }
}
