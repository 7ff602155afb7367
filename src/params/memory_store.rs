//! In-memory parameter store
//!
//! Behaves like the file store without touching disk and counts every read
//! and write so tests can check how a control used the store.

use super::ParamStore;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Parameter store backed by a `HashMap`
#[derive(Debug, Default)]
pub struct MemoryParamStore {
    values: RwLock<HashMap<String, String>>,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl MemoryParamStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given pairs
    ///
    /// Seeding does not count as writes.
    pub fn with_values<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            values: RwLock::new(values),
            ..Self::default()
        }
    }

    /// Number of `get` calls served so far
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of `put`/`remove` calls served so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Whether the key is present
    pub fn contains(&self, key: &str) -> bool {
        self.values.read().contains_key(key)
    }

    /// Sorted copy of the whole store
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl ParamStore for MemoryParamStore {
    fn get(&self, key: &str) -> String {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.values.read().get(key).cloned().unwrap_or_default()
    }

    fn put(&self, key: &str, value: &str) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.values.write().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.values.write().remove(key);
    }
}
