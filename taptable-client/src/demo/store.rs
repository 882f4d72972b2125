//! redb-backed key-value store for the demo backend
//!
//! # Tables
//!
//! | Table | Key | Value |
//! |-------|-----|-------|
//! | `collections` | collection name | JSON-serialized array of records |
//! | `meta` | `"token"` | session token |
//!
//! Collections are whole JSON arrays under one key each: every operation
//! reads the full array, mutates it in memory and writes it back. A read
//! that hits missing or undecodable data yields an empty list rather than
//! an error, so a damaged store degrades to "no data" instead of wedging
//! the UI.

use redb::{Database, ReadableDatabase, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Table for collections: key = collection name, value = JSON array
const COLLECTIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("collections");

/// Table for scalar metadata (currently only the session token)
const META_TABLE: TableDefinition<&str, &str> = TableDefinition::new("meta");

pub const RESTAURANTS: &str = "restaurants";
pub const MENU_ITEMS: &str = "menuItems";
pub const TABLES: &str = "tables";
pub const ORDERS: &str = "orders";

const TOKEN_KEY: &str = "token";

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Demo data store backed by redb
///
/// A single shared mutable resource with no locking discipline beyond
/// redb's per-transaction isolation: concurrent writers to the same
/// collection race and the last full-array write wins. Acceptable for
/// single-user demo operation only.
#[derive(Clone)]
pub struct DemoStore {
    db: Arc<Database>,
}

impl DemoStore {
    /// Open or create the store at the given path, creating parent
    /// directories as needed.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory store (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StoreResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(COLLECTIONS_TABLE)?;
            let _ = write_txn.open_table(META_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    /// True if the collection key has ever been written.
    ///
    /// Distinct from an empty collection: seeding happens only while the
    /// key is entirely absent.
    pub fn has_collection(&self, key: &str) -> StoreResult<bool> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;
        Ok(table.get(key)?.is_some())
    }

    /// Read a whole collection. Missing or undecodable data yields an
    /// empty list.
    pub fn get_collection<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Vec<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;
        match table.get(key)? {
            Some(value) => match serde_json::from_slice(value.value()) {
                Ok(records) => Ok(records),
                Err(error) => {
                    warn!(key, %error, "undecodable collection, treating as empty");
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    /// Replace a whole collection.
    pub fn put_collection<T: Serialize>(&self, key: &str, records: &[T]) -> StoreResult<()> {
        let value = serde_json::to_vec(records)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(COLLECTIONS_TABLE)?;
            table.insert(key, value.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Current session token, if one is stored.
    pub fn get_token(&self) -> StoreResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(META_TABLE)?;
        Ok(table.get(TOKEN_KEY)?.map(|guard| guard.value().to_string()))
    }

    /// Store the session token.
    pub fn set_token(&self, token: &str) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(META_TABLE)?;
            table.insert(TOKEN_KEY, token)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Remove the session token. A missing token is not an error.
    pub fn clear_token(&self) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(META_TABLE)?;
            table.remove(TOKEN_KEY)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Table, TableStatus};

    fn test_table(id: i64, number: i32) -> Table {
        Table {
            id,
            number,
            seats: 4,
            status: TableStatus::Available,
            restaurant_id: 1,
            qr_code: format!("QR-TABLE-{}", number),
        }
    }

    #[test]
    fn test_missing_collection_reads_empty() {
        let store = DemoStore::open_in_memory().unwrap();
        assert!(!store.has_collection(TABLES).unwrap());
        let tables: Vec<Table> = store.get_collection(TABLES).unwrap();
        assert!(tables.is_empty());
    }

    #[test]
    fn test_put_then_get_round_trips() {
        let store = DemoStore::open_in_memory().unwrap();
        store
            .put_collection(TABLES, &[test_table(1, 1), test_table(2, 2)])
            .unwrap();

        assert!(store.has_collection(TABLES).unwrap());
        let tables: Vec<Table> = store.get_collection(TABLES).unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0], test_table(1, 1));
    }

    #[test]
    fn test_put_replaces_the_whole_collection() {
        let store = DemoStore::open_in_memory().unwrap();
        store
            .put_collection(TABLES, &[test_table(1, 1), test_table(2, 2)])
            .unwrap();
        store.put_collection(TABLES, &[test_table(3, 3)]).unwrap();

        let tables: Vec<Table> = store.get_collection(TABLES).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].id, 3);
    }

    #[test]
    fn test_empty_collection_still_counts_as_written() {
        let store = DemoStore::open_in_memory().unwrap();
        store.put_collection::<Table>(ORDERS, &[]).unwrap();
        assert!(store.has_collection(ORDERS).unwrap());
    }

    #[test]
    fn test_undecodable_collection_reads_empty() {
        let store = DemoStore::open_in_memory().unwrap();
        let write_txn = store.db.begin_write().unwrap();
        {
            let mut table = write_txn.open_table(COLLECTIONS_TABLE).unwrap();
            table.insert(TABLES, b"not json".as_slice()).unwrap();
        }
        write_txn.commit().unwrap();

        let tables: Vec<Table> = store.get_collection(TABLES).unwrap();
        assert!(tables.is_empty());
        // The key itself is still present, so seeding will not overwrite it.
        assert!(store.has_collection(TABLES).unwrap());
    }

    #[test]
    fn test_token_set_get_clear() {
        let store = DemoStore::open_in_memory().unwrap();
        assert_eq!(store.get_token().unwrap(), None);

        store.set_token("demo-jwt-1").unwrap();
        assert_eq!(store.get_token().unwrap().as_deref(), Some("demo-jwt-1"));

        store.clear_token().unwrap();
        assert_eq!(store.get_token().unwrap(), None);

        // Clearing again is a no-op.
        store.clear_token().unwrap();
    }
}
