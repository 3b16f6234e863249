use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::model::KvEntryDB;
use crate::errors::IntoCore;
use crate::schema::kv_entries::dsl::*;
use primetoys_core::errors::Result;

/// Reads the raw value stored under `key`.
pub fn load_value(conn: &mut SqliteConnection, key: &str) -> Result<Option<String>> {
    kv_entries
        .filter(entry_key.eq(key))
        .select(entry_value)
        .first::<String>(conn)
        .optional()
        .into_core()
}

/// Inserts or replaces the value stored under `key`.
pub fn store_value(conn: &mut SqliteConnection, key: &str, value: &str) -> Result<()> {
    diesel::replace_into(kv_entries)
        .values(&KvEntryDB {
            entry_key: key.to_string(),
            entry_value: value.to_string(),
        })
        .execute(conn)
        .into_core()?;
    debug!("Stored {} bytes under '{}'", value.len(), key);
    Ok(())
}

/// Removes `key`. Returns whether anything was stored there.
pub fn delete_value(conn: &mut SqliteConnection, key: &str) -> Result<bool> {
    let removed = diesel::delete(kv_entries.filter(entry_key.eq(key)))
        .execute(conn)
        .into_core()?;
    if removed > 0 {
        debug!("Erased '{}'", key);
    }
    Ok(removed > 0)
}

/// Decodes the JSON array stored under `key`; a missing key is an empty list.
pub fn load_collection<T: DeserializeOwned>(
    conn: &mut SqliteConnection,
    key: &str,
) -> Result<Vec<T>> {
    match load_value(conn, key)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

/// Appends `item` to the JSON array stored under `key`.
///
/// Existing elements are carried over verbatim, including fields this
/// version does not know about. Call inside a transaction.
pub fn append_to_collection<T: Serialize>(
    conn: &mut SqliteConnection,
    key: &str,
    item: &T,
) -> Result<usize> {
    let mut items: Vec<Value> = load_collection(conn, key)?;
    items.push(serde_json::to_value(item)?);
    store_value(conn, key, &serde_json::to_string(&items)?)?;
    Ok(items.len())
}
