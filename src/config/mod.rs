//! Configuration management module
//!
//! Loads and saves the settings application's own configuration (device
//! paths and commands, not vehicle parameters). The file lives at
//! `$OPKR_SETTINGS_HOME/config.json` and is written atomically.

pub mod manager;
pub mod models;

pub use manager::{ConfigManager, SETTINGS_HOME_ENV};
pub use models::{AppConfig, DevicePaths, HardwareFeatures, SystemCommands, UserPreferences};
