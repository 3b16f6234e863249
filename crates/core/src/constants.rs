/// Storage key holding the ordered list of registered accounts
pub const ACCOUNTS_KEY: &str = "accounts";

/// Prefix of the per-account stock collection key (`stocks:<ownerId>`)
pub const STOCKS_KEY_PREFIX: &str = "stocks:";

/// Storage key holding the serialized session snapshot
pub const SESSION_KEY: &str = "session";

/// Store name printed at the top of exported reports
pub const DEFAULT_STORE_NAME: &str = "PRIME TOYS";

/// Currency label used for prices in exported reports
pub const DEFAULT_CURRENCY_LABEL: &str = "INR";

/// Exported report file names are `<prefix><username>.csv`
pub const EXPORT_FILE_PREFIX: &str = "PrimeToys_Inventory_";

/// Records holding fewer units than this are flagged as low stock
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Returns the storage key of the stock collection owned by `owner_id`.
pub fn stocks_key(owner_id: &str) -> String {
    format!("{}{}", STOCKS_KEY_PREFIX, owner_id)
}
