use log::debug;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, DbTransactionExecutor};
use crate::kv::{append_to_collection, load_collection};
use primetoys_core::constants::stocks_key;
use primetoys_core::errors::Result;
use primetoys_core::stocks::{StockRecord, StockRepositoryTrait};

/// Repository for per-account stock collections stored under `stocks:<ownerId>`
pub struct StockRepository {
    pool: Arc<DbPool>,
}

impl StockRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl StockRepositoryTrait for StockRepository {
    fn list(&self, owner_id: &str) -> Result<Vec<StockRecord>> {
        let mut conn = get_connection(&self.pool)?;
        load_collection(&mut conn, &stocks_key(owner_id))
    }

    fn append(&self, record: StockRecord) -> Result<StockRecord> {
        let key = stocks_key(&record.owner_id);
        self.pool.execute(|conn| {
            let count = append_to_collection(conn, &key, &record)?;
            debug!("'{}' now holds {} records", key, count);
            Ok(record)
        })
    }
}
