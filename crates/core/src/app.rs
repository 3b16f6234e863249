//! Top-level application controller.
//!
//! `InventoryApp` is what a presentation layer talks to. It owns the session
//! explicitly and scopes every inventory operation to the signed-in account.

use log::info;
use std::sync::Arc;

use crate::accounts::{Account, AccountServiceTrait};
use crate::errors::Result;
use crate::export::{build_inventory_report, ExportDocument, ExportOptions};
use crate::session::{SessionManager, SessionRepositoryTrait, SessionState};
use crate::stocks::{InventoryListing, NewStockRecord, StockRecord, StockServiceTrait};

pub struct InventoryApp {
    account_service: Arc<dyn AccountServiceTrait>,
    stock_service: Arc<dyn StockServiceTrait>,
    session: SessionManager,
    export_options: ExportOptions,
}

impl InventoryApp {
    /// Wires the services and restores any persisted session.
    pub fn start(
        account_service: Arc<dyn AccountServiceTrait>,
        stock_service: Arc<dyn StockServiceTrait>,
        session_repository: Arc<dyn SessionRepositoryTrait>,
        export_options: ExportOptions,
    ) -> Result<Self> {
        let session = SessionManager::restore(session_repository)?;
        Ok(Self {
            account_service,
            stock_service,
            session,
            export_options,
        })
    }

    pub fn session(&self) -> &SessionState {
        self.session.state()
    }

    pub fn current_account(&self) -> Option<&Account> {
        self.session.current_account()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn list_accounts(&self) -> Result<Vec<Account>> {
        self.account_service.list_accounts()
    }

    /// Registers a new account and signs it in.
    pub fn sign_up(&mut self, username: &str, password: &str) -> Result<Account> {
        let account = self.account_service.register(username, password)?;
        info!("Signed up '{}'", account.username);
        self.session.sign_in(account).cloned()
    }

    /// Authenticates and signs in. A failed attempt leaves the session unchanged.
    pub fn log_in(&mut self, username: &str, password: &str) -> Result<Account> {
        let account = self.account_service.authenticate(username, password)?;
        info!("Logged in '{}'", account.username);
        self.session.sign_in(account).cloned()
    }

    pub fn log_out(&mut self) -> Result<()> {
        self.session.sign_out()
    }

    pub fn add_stock(&self, new_record: &NewStockRecord) -> Result<StockRecord> {
        let owner = self.session.require_account()?;
        self.stock_service.add_record(&owner.id, new_record)
    }

    pub fn stock_listing(&self) -> Result<InventoryListing> {
        let owner = self.session.require_account()?;
        self.stock_service.get_listing(&owner.id)
    }

    /// Builds the report for the signed-in account; `None` when there is
    /// nothing to export.
    pub fn export_inventory(&self) -> Result<Option<ExportDocument>> {
        let owner = self.session.require_account()?;
        let listing = self.stock_service.get_listing(&owner.id)?;
        build_inventory_report(owner, &listing, &self.export_options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::{AccountRepositoryTrait, AccountService};
    use crate::errors::Error;
    use crate::stocks::{StockRepositoryTrait, StockService};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    // One in-memory store playing all three repositories.
    #[derive(Default)]
    struct MemoryStore {
        accounts: Mutex<Vec<Account>>,
        stocks: Mutex<Vec<StockRecord>>,
        session: Mutex<Option<Account>>,
    }

    impl AccountRepositoryTrait for MemoryStore {
        fn list(&self) -> Result<Vec<Account>> {
            Ok(self.accounts.lock().unwrap().clone())
        }

        fn create(&self, account: Account) -> Result<Account> {
            self.accounts.lock().unwrap().push(account.clone());
            Ok(account)
        }
    }

    impl StockRepositoryTrait for MemoryStore {
        fn list(&self, owner_id: &str) -> Result<Vec<StockRecord>> {
            Ok(self
                .stocks
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.owner_id == owner_id)
                .cloned()
                .collect())
        }

        fn append(&self, record: StockRecord) -> Result<StockRecord> {
            self.stocks.lock().unwrap().push(record.clone());
            Ok(record)
        }
    }

    impl SessionRepositoryTrait for MemoryStore {
        fn load(&self) -> Result<Option<Account>> {
            Ok(self.session.lock().unwrap().clone())
        }

        fn save(&self, account: &Account) -> Result<()> {
            *self.session.lock().unwrap() = Some(account.clone());
            Ok(())
        }

        fn clear(&self) -> Result<()> {
            *self.session.lock().unwrap() = None;
            Ok(())
        }
    }

    fn start(store: &Arc<MemoryStore>) -> InventoryApp {
        InventoryApp::start(
            Arc::new(AccountService::with_plaintext_credentials(store.clone())),
            Arc::new(StockService::new(store.clone())),
            store.clone(),
            ExportOptions {
                generated_on: NaiveDate::from_ymd_opt(2026, 1, 1),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_inventory_requires_login() {
        let store = Arc::new(MemoryStore::default());
        let app = start(&store);

        assert!(!app.is_authenticated());
        assert!(matches!(
            app.add_stock(&NewStockRecord::new("Car", "T-1", 10, 20, 5)),
            Err(Error::NotAuthenticated)
        ));
        assert!(matches!(app.stock_listing(), Err(Error::NotAuthenticated)));
        assert!(matches!(
            app.export_inventory(),
            Err(Error::NotAuthenticated)
        ));
    }

    #[test]
    fn test_full_session_flow() {
        let store = Arc::new(MemoryStore::default());
        let mut app = start(&store);

        let alice = app.sign_up("alice", "pw1").unwrap();
        assert_eq!(app.current_account(), Some(&alice));
        assert!(app.export_inventory().unwrap().is_none());

        app.add_stock(&NewStockRecord::new("Car", "T-1", 10, 20, 5))
            .unwrap();
        app.add_stock(&NewStockRecord::new("Doll", "T-2", 4, 9, 3))
            .unwrap();
        assert_eq!(app.stock_listing().unwrap().grand_total, dec!(62));

        // Restart: the snapshot brings alice back without a login.
        let restarted = start(&store);
        assert_eq!(restarted.current_account(), Some(&alice));
        let report = restarted.export_inventory().unwrap().unwrap();
        assert_eq!(report.file_name, "PrimeToys_Inventory_alice.csv");

        app.log_out().unwrap();
        assert_eq!(app.session(), &SessionState::Anonymous);
        assert!(!start(&store).is_authenticated());
    }

    #[test]
    fn test_failed_login_keeps_session() {
        let store = Arc::new(MemoryStore::default());
        let mut app = start(&store);
        let alice = app.sign_up("alice", "pw1").unwrap();

        assert!(matches!(
            app.log_in("alice", "wrong"),
            Err(Error::InvalidCredentials)
        ));
        assert_eq!(app.current_account(), Some(&alice));
    }

    #[test]
    fn test_users_see_only_their_stock() {
        let store = Arc::new(MemoryStore::default());
        let mut app = start(&store);

        app.sign_up("alice", "pw1").unwrap();
        app.add_stock(&NewStockRecord::new("Car", "T-1", 10, 20, 5))
            .unwrap();
        app.log_out().unwrap();

        app.sign_up("bob", "pw2").unwrap();
        assert!(app.stock_listing().unwrap().is_empty());

        app.log_in("alice", "pw1").unwrap();
        assert_eq!(app.stock_listing().unwrap().record_count(), 1);
        assert_eq!(app.list_accounts().unwrap().len(), 2);
    }
}
