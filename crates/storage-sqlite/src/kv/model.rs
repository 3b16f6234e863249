//! Database model for key-value entries.

use diesel::prelude::*;

/// Database model for one key-value pair
#[derive(Queryable, Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::kv_entries)]
pub struct KvEntryDB {
    pub entry_key: String,
    pub entry_value: String,
}
