//! `offroad-settings` - on-device settings panel for a driver-assistance system
//!
//! Every setting lives in a persistent key/string parameter store. Panels are
//! lists of small controls bound to store keys: toggles, bounded steppers,
//! enumerated choices, status labels and confirmation-gated actions that
//! trigger reboots or maintenance scripts.
//!
//! # Architecture
//!
//! - `params`: the `ParamStore` interface and its file and memory backends
//! - `controls`: the row types, each receiving the store at construction
//! - `panels`: static schema and the six-panel `SettingsWindow`
//! - `system`: `ProcessRunner`, carrying out reboots, scripts and file actions
//! - `frontend`: line-oriented terminal driver used by the binary
//! - `config`, `utils`: configuration file and logging setup

// Module declarations
pub mod config;
pub mod controls;
pub mod error;
pub mod frontend;
pub mod panels;
pub mod params;
pub mod system;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use error::{Result, SettingsError};
pub use params::{FileParamStore, MemoryParamStore, ParamStore, SharedParams};
