//! Stock repository and service traits.

use super::stocks_model::{InventoryListing, NewStockRecord, StockRecord};
use crate::errors::Result;

/// Trait defining the contract for per-account stock persistence.
///
/// Each account owns one append-only collection. No update or delete
/// operation exists.
pub trait StockRepositoryTrait: Send + Sync {
    /// Lists the records stored for `owner_id` in insertion order.
    fn list(&self, owner_id: &str) -> Result<Vec<StockRecord>>;

    /// Appends a record to its owner's collection.
    fn append(&self, record: StockRecord) -> Result<StockRecord>;
}

/// Trait defining the contract for the inventory store.
pub trait StockServiceTrait: Send + Sync {
    /// All records owned by `owner_id`, in insertion order.
    fn list_records(&self, owner_id: &str) -> Result<Vec<StockRecord>>;

    /// Validates the form, values the new record and stores it.
    fn add_record(&self, owner_id: &str, new_record: &NewStockRecord) -> Result<StockRecord>;

    /// Records sorted by item code (natural order) with their grand total.
    fn get_listing(&self, owner_id: &str) -> Result<InventoryListing>;
}
