//! redb-based record store
//!
//! The Rust rendition of the demo's browser-local persistent storage: named
//! collections of JSON-serialized records. Unlike the original, which
//! overwrote a whole collection on every write, records are keyed
//! individually so partial updates never rewrite unrelated rows.
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `records` | `(collection, record_id)` | JSON bytes | All persisted records |
//!
//! # Durability
//!
//! redb commits are durable as soon as `commit()` returns (copy-on-write
//! with atomic pointer swap). Single-writer: concurrent processes against
//! the same file are not coordinated, matching the demo's
//! last-write-wins contract.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// All records: key = (collection name, record id), value = JSON bytes
const RECORDS_TABLE: TableDefinition<(&str, &str), &[u8]> = TableDefinition::new("records");

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
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

/// Keyed record store backed by redb
#[derive(Clone)]
pub struct RecordStore {
    db: Arc<Database>,
}

impl RecordStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (tests and throwaway demos)
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StoreResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(RECORDS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Get a single record, `None` if absent
    pub fn get<T: DeserializeOwned>(&self, collection: &str, id: &str) -> StoreResult<Option<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RECORDS_TABLE)?;

        match table.get((collection, id))? {
            Some(value) => {
                let record: T = serde_json::from_slice(value.value())?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// Insert or overwrite a record
    pub fn put<T: Serialize>(&self, collection: &str, id: &str, record: &T) -> StoreResult<()> {
        let value = serde_json::to_vec(record)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(RECORDS_TABLE)?;
            table.insert((collection, id), value.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Remove a record; returns whether it existed
    pub fn remove(&self, collection: &str, id: &str) -> StoreResult<bool> {
        let write_txn = self.db.begin_write()?;
        let existed = {
            let mut table = write_txn.open_table(RECORDS_TABLE)?;
            table.remove((collection, id))?.is_some()
        };
        write_txn.commit()?;
        Ok(existed)
    }

    /// All records of a collection, ordered by record id
    ///
    /// Returns an empty list for an unknown collection, matching the
    /// "absent collection reads as empty" contract.
    pub fn list<T: DeserializeOwned>(&self, collection: &str) -> StoreResult<Vec<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RECORDS_TABLE)?;

        let mut records = Vec::new();
        for result in table.range((collection, "")..)? {
            let (key, value) = result?;
            if key.value().0 != collection {
                break;
            }
            let record: T = serde_json::from_slice(value.value())?;
            records.push(record);
        }
        Ok(records)
    }

    /// All record ids of a collection
    pub fn list_ids(&self, collection: &str) -> StoreResult<Vec<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RECORDS_TABLE)?;

        let mut ids = Vec::new();
        for result in table.range((collection, "")..)? {
            let (key, _value) = result?;
            let (coll, id) = key.value();
            if coll != collection {
                break;
            }
            ids.push(id.to_string());
        }
        Ok(ids)
    }

    /// Number of records in a collection
    pub fn len(&self, collection: &str) -> StoreResult<usize> {
        Ok(self.list_ids(collection)?.len())
    }

    /// Whether a collection holds no records
    pub fn is_empty(&self, collection: &str) -> StoreResult<bool> {
        Ok(self.len(collection)? == 0)
    }

    /// Drop every record of a collection
    pub fn clear(&self, collection: &str) -> StoreResult<()> {
        let ids = self.list_ids(collection)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(RECORDS_TABLE)?;
            for id in &ids {
                table.remove((collection, id.as_str()))?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Record {
        id: String,
        value: i64,
    }

    fn record(id: &str, value: i64) -> Record {
        Record {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn test_put_get_roundtrip() {
        let store = RecordStore::open_in_memory().unwrap();
        let r = record("a", 1);
        store.put("users", "a", &r).unwrap();

        let loaded: Option<Record> = store.get("users", "a").unwrap();
        assert_eq!(loaded, Some(r));
    }

    #[test]
    fn test_get_absent() {
        let store = RecordStore::open_in_memory().unwrap();
        let loaded: Option<Record> = store.get("users", "missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_put_overwrites() {
        let store = RecordStore::open_in_memory().unwrap();
        store.put("users", "a", &record("a", 1)).unwrap();
        store.put("users", "a", &record("a", 2)).unwrap();

        let loaded: Record = store.get("users", "a").unwrap().unwrap();
        assert_eq!(loaded.value, 2);
        assert_eq!(store.len("users").unwrap(), 1);
    }

    #[test]
    fn test_list_is_scoped_to_collection() {
        let store = RecordStore::open_in_memory().unwrap();
        store.put("users", "a", &record("a", 1)).unwrap();
        store.put("users", "b", &record("b", 2)).unwrap();
        store.put("usersx", "c", &record("c", 3)).unwrap();
        store.put("orders", "d", &record("d", 4)).unwrap();

        let users: Vec<Record> = store.list("users").unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, "a");
        assert_eq!(users[1].id, "b");
    }

    #[test]
    fn test_unknown_collection_reads_empty() {
        let store = RecordStore::open_in_memory().unwrap();
        let records: Vec<Record> = store.list("nothing").unwrap();
        assert!(records.is_empty());
        assert!(store.is_empty("nothing").unwrap());
    }

    #[test]
    fn test_remove() {
        let store = RecordStore::open_in_memory().unwrap();
        store.put("users", "a", &record("a", 1)).unwrap();

        assert!(store.remove("users", "a").unwrap());
        assert!(!store.remove("users", "a").unwrap());
        assert!(store.is_empty("users").unwrap());
    }

    #[test]
    fn test_clear() {
        let store = RecordStore::open_in_memory().unwrap();
        store.put("cart_u1", "p1", &record("p1", 1)).unwrap();
        store.put("cart_u1", "p2", &record("p2", 2)).unwrap();
        store.put("cart_u2", "p1", &record("p1", 3)).unwrap();

        store.clear("cart_u1").unwrap();
        assert!(store.is_empty("cart_u1").unwrap());
        assert_eq!(store.len("cart_u2").unwrap(), 1);
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.redb");

        {
            let store = RecordStore::open(&path).unwrap();
            store.put("users", "a", &record("a", 7)).unwrap();
        }

        let store = RecordStore::open(&path).unwrap();
        let loaded: Record = store.get("users", "a").unwrap().unwrap();
        assert_eq!(loaded.value, 7);
    }
}
