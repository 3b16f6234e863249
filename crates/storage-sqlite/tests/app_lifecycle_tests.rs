//! End-to-end tests driving `InventoryApp` over a real SQLite store.

use primetoys_core::export::ExportOptions;
use primetoys_core::stocks::NewStockRecord;
use primetoys_core::{Error, InventoryApp};
use primetoys_storage_sqlite::kv::store_value;
use primetoys_storage_sqlite::{create_pool, get_connection, open_inventory_app, StorageConfig};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::tempdir;

fn open(config: &StorageConfig) -> InventoryApp {
    open_inventory_app(config, ExportOptions::default()).expect("store should open")
}

#[test]
fn test_signup_add_stock_and_restart() {
    let dir = tempdir().unwrap();
    let config = StorageConfig::new(dir.path());

    {
        let mut app = open(&config);
        assert!(!app.is_authenticated());

        app.sign_up("alice", "pw1").unwrap();
        app.add_stock(&NewStockRecord::new("Robot", "T-10", "10", "15", "5"))
            .unwrap();
        app.add_stock(&NewStockRecord::new("Kite", "T-2", "4", "6", "3"))
            .unwrap();
    }

    let app = open(&config);
    assert_eq!(app.current_account().map(|a| a.username.as_str()), Some("alice"));

    let listing = app.stock_listing().unwrap();
    let codes: Vec<&str> = listing.records.iter().map(|r| r.item_code.as_str()).collect();
    assert_eq!(codes, vec!["T-2", "T-10"]);
    assert_eq!(listing.grand_total, dec!(62));
}

#[test]
fn test_logout_survives_restart_and_accounts_stay_isolated() {
    let dir = tempdir().unwrap();
    let config = StorageConfig::new(dir.path());

    {
        let mut app = open(&config);
        app.sign_up("alice", "pw1").unwrap();
        app.add_stock(&NewStockRecord::new("Robot", "T-1", "10", "15", "5"))
            .unwrap();
        app.log_out().unwrap();
        app.sign_up("bob", "pw2").unwrap();
        assert!(app.stock_listing().unwrap().is_empty());
        app.log_out().unwrap();
    }

    let mut app = open(&config);
    assert!(!app.is_authenticated());
    assert!(matches!(app.log_in("alice", "wrong"), Err(Error::InvalidCredentials)));
    assert!(matches!(app.sign_up("alice", "pw3"), Err(Error::DuplicateUsername(_))));

    app.log_in("alice", "pw1").unwrap();
    assert_eq!(app.stock_listing().unwrap().record_count(), 1);
    assert_eq!(app.list_accounts().unwrap().len(), 2);
}

#[test]
fn test_export_writes_report_file() {
    let dir = tempdir().unwrap();
    let config = StorageConfig::new(dir.path().join("data"));
    let mut app = open(&config);

    app.sign_up("alice", "pw1").unwrap();
    assert!(app.export_inventory().unwrap().is_none());

    app.add_stock(&NewStockRecord::new("Robot", "T-1", "10", "15", "5"))
        .unwrap();
    let document = app.export_inventory().unwrap().expect("inventory is not empty");
    assert_eq!(document.file_name, "PrimeToys_Inventory_alice.csv");

    let path = document.write_to_dir(&dir.path().join("exports")).unwrap();
    let written = std::fs::read_to_string(path).unwrap();
    assert!(written.contains("T-1"));
    assert!(written.contains("Grand Total"));
}

#[test]
fn test_corrupt_session_starts_anonymous() {
    let dir = tempdir().unwrap();
    let config = StorageConfig::new(dir.path());
    drop(open(&config));

    let pool = create_pool(config.db_path_str().unwrap()).unwrap();
    store_value(&mut get_connection(&pool).unwrap(), "session", "not json").unwrap();
    drop(pool);

    let app = open(&config);
    assert!(!app.is_authenticated());
}

#[test]
fn test_high_precision_record_is_unchanged_after_restart() {
    let dir = tempdir().unwrap();
    let config = StorageConfig::new(dir.path());

    let added = {
        let mut app = open(&config);
        app.sign_up("alice", "pw1").unwrap();
        app.add_stock(&NewStockRecord::new("Car", "T-1", "0.1234567890123456789", "1", "3"))
            .unwrap()
    };

    let app = open(&config);
    let listing = app.stock_listing().unwrap();
    assert_eq!(listing.records, vec![added.clone()]);
    assert_eq!(listing.records[0].stock_value, dec!(0.3703703670370370367));
    assert_eq!(
        listing.records[0].stock_value,
        listing.records[0].purchase_price * Decimal::from(listing.records[0].quantity)
    );
    assert_eq!(listing.grand_total, added.stock_value);
}

#[test]
fn test_largest_price_keeps_inventory_readable() {
    let dir = tempdir().unwrap();
    let config = StorageConfig::new(dir.path());
    let mut app = open(&config);
    app.sign_up("alice", "pw1").unwrap();

    app.add_stock(&NewStockRecord::new("Car", "T-1", "10", "20", "0"))
        .unwrap();
    let max = Decimal::MAX.to_string();
    let big = app
        .add_stock(&NewStockRecord::new("Yacht", "B-1", &max, &max, "1"))
        .unwrap();

    let listing = app.stock_listing().unwrap();
    assert_eq!(listing.record_count(), 2);
    assert_eq!(listing.grand_total, Decimal::MAX);
    assert!(listing.records.contains(&big));
    assert!(app.export_inventory().unwrap().is_some());
}
