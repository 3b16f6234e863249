use log::debug;
use std::sync::Arc;

use super::stocks_model::{InventoryListing, NewStockRecord, StockRecord};
use super::stocks_traits::{StockRepositoryTrait, StockServiceTrait};
use crate::errors::Result;
use crate::utils::natural_order::natural_cmp;
use crate::valuation::calculate_grand_total;

/// Service for adding and listing an account's stock records
pub struct StockService {
    repository: Arc<dyn StockRepositoryTrait>,
}

impl StockService {
    /// Creates a new StockService instance
    pub fn new(repository: Arc<dyn StockRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl StockServiceTrait for StockService {
    fn list_records(&self, owner_id: &str) -> Result<Vec<StockRecord>> {
        let mut records = self.repository.list(owner_id)?;
        // Never leak another account's records, whatever the backend returns.
        records.retain(|r| r.owner_id == owner_id);
        Ok(records)
    }

    fn add_record(&self, owner_id: &str, new_record: &NewStockRecord) -> Result<StockRecord> {
        let record = StockRecord::from_form(owner_id, new_record)?;
        debug!(
            "Adding stock record {} ({}) for owner {}, value {}",
            record.id, record.item_code, owner_id, record.stock_value
        );
        self.repository.append(record)
    }

    fn get_listing(&self, owner_id: &str) -> Result<InventoryListing> {
        let mut records = self.list_records(owner_id)?;
        records.sort_by(|a, b| natural_cmp(&a.item_code, &b.item_code));
        let grand_total = calculate_grand_total(&records)?;

        Ok(InventoryListing {
            records,
            grand_total,
        })
    }
}
