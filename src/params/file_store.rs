//! File-backed parameter store
//!
//! Stores each parameter as its own file, `<params_dir>/<key>`, holding the
//! raw value bytes. This is the layout other processes on the device read,
//! so values written here are immediately visible to them.
//!
//! # Thread Safety
//!
//! - Writers inside this process are serialised by a `parking_lot::Mutex`
//! - Atomic writes via `tempfile::NamedTempFile::persist()` mean readers in
//!   other processes never observe a partially written value

use super::{ParamStore, is_valid_key};
use crate::error::{Result, SettingsError};
use parking_lot::Mutex;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Parameter store persisted as one file per key
#[derive(Debug)]
pub struct FileParamStore {
    /// Directory holding one file per parameter (typically `/data/params/d`)
    params_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileParamStore {
    /// Open a store rooted at `params_dir`, creating the directory if needed
    pub fn open(params_dir: impl Into<PathBuf>) -> Result<Self> {
        let params_dir = params_dir.into();

        if !params_dir.exists() {
            std::fs::create_dir_all(&params_dir).map_err(|e| SettingsError::ParamStoreError {
                path: params_dir.clone(),
                source: Box::new(e),
            })?;
        }

        debug!("Opened parameter store at {}", params_dir.display());
        Ok(Self {
            params_dir,
            write_lock: Mutex::new(()),
        })
    }

    /// Directory this store writes into
    pub fn params_dir(&self) -> &Path {
        &self.params_dir
    }

    /// Read a value, distinguishing I/O failures from an absent key
    ///
    /// Returns `Ok(None)` when the key has never been written.
    pub fn try_get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SettingsError::ParamStoreError {
                path,
                source: Box::new(e),
            }),
        }
    }

    /// Write a value atomically
    pub fn try_put(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        let _guard = self.write_lock.lock();

        let store_err = |e: std::io::Error| SettingsError::ParamStoreError {
            path: path.clone(),
            source: Box::new(e),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(&self.params_dir).map_err(store_err)?;
        tmp.write_all(value.as_bytes()).map_err(store_err)?;
        tmp.as_file().sync_all().map_err(store_err)?;
        tmp.persist(&path).map_err(|e| store_err(e.error))?;

        debug!("param {} = {:?}", key, value);
        Ok(())
    }

    /// Delete a value; deleting an absent key succeeds
    pub fn try_remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        let _guard = self.write_lock.lock();

        match std::fs::remove_file(&path) {
            Ok(()) => {
                debug!("param {} removed", key);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SettingsError::ParamStoreError {
                path,
                source: Box::new(e),
            }),
        }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        if !is_valid_key(key) {
            return Err(SettingsError::InvalidParamKey(key.to_string()));
        }
        Ok(self.params_dir.join(key))
    }
}

impl ParamStore for FileParamStore {
    fn get(&self, key: &str) -> String {
        match self.try_get(key) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                error!("Failed to read param {}: {}", key, e);
                String::new()
            }
        }
    }

    fn put(&self, key: &str, value: &str) {
        if let Err(e) = self.try_put(key, value) {
            error!("Failed to write param {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.try_remove(key) {
            error!("Failed to remove param {}: {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_dir;

    #[test]
    fn open_creates_directory() {
        let temp = create_test_dir();
        let dir = temp.path().join("params").join("d");
        let store = FileParamStore::open(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(store.params_dir(), dir.as_path());
    }

    #[test]
    fn absent_key_reads_empty() {
        let temp = create_test_dir();
        let store = FileParamStore::open(temp.path()).unwrap();
        assert_eq!(store.try_get("DongleId").unwrap(), None);
        assert_eq!(store.get("DongleId"), "");
        assert!(!store.get_bool("IsMetric"));
    }

    #[test]
    fn put_writes_one_file_per_key() {
        let temp = create_test_dir();
        let store = FileParamStore::open(temp.path()).unwrap();

        store.put("OpkrAutoShutdown", "3");
        store.put_bool("IsMetric", true);

        let raw = std::fs::read_to_string(temp.path().join("OpkrAutoShutdown")).unwrap();
        assert_eq!(raw, "3");
        assert_eq!(store.get("OpkrAutoShutdown"), "3");
        assert!(store.get_bool("IsMetric"));
    }

    #[test]
    fn put_overwrites_and_leaves_no_temp_files() {
        let temp = create_test_dir();
        let store = FileParamStore::open(temp.path()).unwrap();

        store.put("SteerRatioAdj", "150");
        store.put("SteerRatioAdj", "151");

        assert_eq!(store.get("SteerRatioAdj"), "151");
        let entries: Vec<_> = std::fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1, "only the param file should remain");
    }

    #[test]
    fn remove_is_idempotent() {
        let temp = create_test_dir();
        let store = FileParamStore::open(temp.path()).unwrap();

        store.put("CalibrationParams", "data");
        store.try_remove("CalibrationParams").unwrap();
        store.try_remove("CalibrationParams").unwrap();
        assert_eq!(store.try_get("CalibrationParams").unwrap(), None);
    }

    #[test]
    fn invalid_keys_are_rejected() {
        let temp = create_test_dir();
        let store = FileParamStore::open(temp.path()).unwrap();

        let result = store.try_put("../escape", "1");
        assert!(matches!(result, Err(SettingsError::InvalidParamKey(_))));
        assert!(!temp.path().parent().unwrap().join("escape").exists());

        // Infallible API logs and reads as absent
        store.put("bad key", "1");
        assert_eq!(store.get("bad key"), "");
    }

    #[test]
    fn values_survive_reopen() {
        let temp = create_test_dir();
        {
            let store = FileParamStore::open(temp.path()).unwrap();
            store.put("GitBranch", "release");
        }
        let store = FileParamStore::open(temp.path()).unwrap();
        assert_eq!(store.get("GitBranch"), "release");
    }

    #[test]
    fn file_store_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<FileParamStore>();
        assert_sync::<FileParamStore>();
    }
}
