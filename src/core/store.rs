use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::errors::{Error, Result};

type Records = BTreeMap<String, Vec<u8>>;

// JSON-valued key-value store shared by every component. All mutations
// go through one lock, so insert_json and increment are the atomic
// primitives that keep uniqueness checks and id assignment race-free.
pub struct Store {
    records: RwLock<Records>,
}

impl Store {
    pub fn open_default() -> Store {
        Store {
            records: RwLock::new(BTreeMap::new()),
        }
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, Records>> {
        self.records
            .read()
            .map_err(|_| Error::Internal("store lock poisoned".to_string()))
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, Records>> {
        self.records
            .write()
            .map_err(|_| Error::Internal("store lock poisoned".to_string()))
    }

    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let records = self.read_guard()?;
        match records.get(key) {
            Some(raw) => Ok(Some(serde_json::from_slice(raw)?)),
            None => Ok(None),
        }
    }

    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_vec(value)?;
        let mut records = self.write_guard()?;
        records.insert(key.to_string(), raw);
        Ok(())
    }

    // Insert-if-absent. Returns false, leaving the stored value alone,
    // when the key is already held.
    pub fn insert_json<T: Serialize>(&self, key: &str, value: &T) -> Result<bool> {
        let raw = serde_json::to_vec(value)?;
        let mut records = self.write_guard()?;
        if records.contains_key(key) {
            return Ok(false);
        }
        records.insert(key.to_string(), raw);
        Ok(true)
    }

    // Read-modify-write under a single lock acquisition. Returns false
    // when the key is absent; the closure decides whether the modified
    // value is written back.
    pub fn update_json<T, F>(&self, key: &str, update: F) -> Result<bool>
    where
        T: DeserializeOwned + Serialize,
        F: FnOnce(&mut T) -> bool,
    {
        let mut records = self.write_guard()?;
        let mut value: T = match records.get(key) {
            Some(raw) => serde_json::from_slice(raw)?,
            None => return Ok(false),
        };
        if update(&mut value) {
            records.insert(key.to_string(), serde_json::to_vec(&value)?);
        }
        Ok(true)
    }

    // Returns whether the key existed.
    pub fn delete(&self, key: &str) -> Result<bool> {
        let mut records = self.write_guard()?;
        Ok(records.remove(key).is_some())
    }

    pub fn exists(&self, key: &str) -> Result<bool> {
        let records = self.read_guard()?;
        Ok(records.contains_key(key))
    }

    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let records = self.read_guard()?;
        Ok(records
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect())
    }

    // Atomic counter; the first call yields 1.
    pub fn increment(&self, key: &str) -> Result<u64> {
        let mut records = self.write_guard()?;
        let next = match records.get(key) {
            Some(raw) => serde_json::from_slice::<u64>(raw)? + 1,
            None => 1,
        };
        records.insert(key.to_string(), serde_json::to_vec(&next)?);
        Ok(next)
    }
}
