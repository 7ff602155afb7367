//! Parameter store
//!
//! Every setting on the device lives in a persistent key → string mapping.
//! Numeric parameters hold a base-10 integer, boolean parameters hold `"1"`
//! or `"0"`. An absent key reads as the empty string (and as `false`); no
//! defaults are injected here, each control treats an unset key as its own
//! zero state.
//!
//! # Architecture
//!
//! - `ParamStore`: the interface every control receives at construction
//! - `FileParamStore`: one file per key under the params directory, atomic writes
//! - `MemoryParamStore`: in-memory store with access counters, used by tests
//!
//! The store performs no validation of values and offers no transactions;
//! the last write wins. Controls clamp before they write.

pub mod file_store;
pub mod memory_store;

use std::sync::Arc;

pub use file_store::FileParamStore;
pub use memory_store::MemoryParamStore;

/// Interface to the persistent parameter store
///
/// Methods are infallible from the caller's point of view. Implementations
/// that can fail (disk, permissions) log the failure and fall back to the
/// absent-key behaviour for reads.
pub trait ParamStore: Send + Sync {
    /// Read a value, returning an empty string when the key is absent
    fn get(&self, key: &str) -> String;

    /// Write a value, replacing any previous one
    fn put(&self, key: &str, value: &str);

    /// Delete a key; removing an absent key is a no-op
    fn remove(&self, key: &str);

    /// Read a boolean flag (`"1"` is true, anything else is false)
    fn get_bool(&self, key: &str) -> bool {
        self.get(key) == "1"
    }

    /// Write a boolean flag as `"1"` or `"0"`
    fn put_bool(&self, key: &str, value: bool) {
        self.put(key, if value { "1" } else { "0" });
    }
}

/// Shared handle to a parameter store, cloned into every control
pub type SharedParams = Arc<dyn ParamStore>;

/// Parse a stored numeric parameter
///
/// Empty, non-numeric and out-of-range values all coerce to `0`.
pub fn parse_int(value: &str) -> i32 {
    value.trim().parse().unwrap_or(0)
}

/// Check that a key can safely name a param file
pub(crate) fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
