//! Wires the SQLite repositories into a running `InventoryApp`.

use log::info;
use std::sync::Arc;

use crate::accounts::AccountRepository;
use crate::config::StorageConfig;
use crate::db;
use crate::session::SessionRepository;
use crate::stocks::StockRepository;
use primetoys_core::accounts::AccountService;
use primetoys_core::errors::Result;
use primetoys_core::export::ExportOptions;
use primetoys_core::stocks::StockService;
use primetoys_core::InventoryApp;

/// Opens (creating if needed) the local store and restores the session.
pub fn open_inventory_app(
    config: &StorageConfig,
    export_options: ExportOptions,
) -> Result<InventoryApp> {
    let db_path = db::init(config)?;
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let account_repository = Arc::new(AccountRepository::new(pool.clone()));
    let stock_repository = Arc::new(StockRepository::new(pool.clone()));
    let session_repository = Arc::new(SessionRepository::new(pool));

    let app = InventoryApp::start(
        Arc::new(AccountService::with_plaintext_credentials(
            account_repository,
        )),
        Arc::new(StockService::new(stock_repository)),
        session_repository,
        export_options,
    )?;

    info!(
        "Inventory store opened at {} (signed in: {})",
        db_path,
        app.current_account()
            .map(|a| a.username.as_str())
            .unwrap_or("nobody")
    );
    Ok(app)
}
