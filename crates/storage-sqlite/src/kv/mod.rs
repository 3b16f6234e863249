//! SQLite-backed key-value storage.
//!
//! Every piece of application state lives in one `kv_entries` row whose value
//! is a JSON document: `accounts`, `stocks:<ownerId>` and `session`.

mod model;
mod store;

pub use model::KvEntryDB;
pub use store::{append_to_collection, delete_value, load_collection, load_value, store_value};
