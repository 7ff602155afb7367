//! Configuration manager for loading and saving application configuration
//!
//! The configuration lives in `$OPKR_SETTINGS_HOME/config.json` (current
//! directory when the variable is unset) and is replaced atomically on save.

use crate::config::models::AppConfig;
use crate::error::{Result, SettingsError, StringError};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Environment variable selecting the settings home directory
pub const SETTINGS_HOME_ENV: &str = "OPKR_SETTINGS_HOME";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Directory holding the configuration and the logs
    pub fn settings_home() -> PathBuf {
        std::env::var_os(SETTINGS_HOME_ENV).map_or_else(|| PathBuf::from("."), PathBuf::from)
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::settings_home().join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_config_dir() -> Result<PathBuf> {
        let config_path = Self::get_config_path();
        let config_dir = config_path
            .parent()
            .ok_or_else(|| SettingsError::ConfigError(StringError::new("Invalid config path")))?;

        std::fs::create_dir_all(config_dir)?;
        Ok(config_dir.to_path_buf())
    }

    /// Load configuration from disk
    ///
    /// A missing or unparsable file yields the default configuration.
    pub fn load() -> Result<AppConfig> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            info!(
                "Configuration file {} not found, using defaults",
                config_path.display()
            );
            return Ok(AppConfig::default());
        }

        let json = std::fs::read_to_string(&config_path)?;

        match serde_json::from_str(&json) {
            Ok(config) => {
                info!("Configuration loaded from {}", config_path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(AppConfig::default())
            }
        }
    }

    /// Save configuration to disk with atomic write
    pub fn save(config: &AppConfig) -> Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = Self::get_config_path();

        let json = serde_json::to_string_pretty(config)?;
        let mut temp = tempfile::NamedTempFile::new_in(&config_dir)?;
        temp.write_all(json.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&config_path)
            .map_err(|e| SettingsError::ConfigError(Box::new(e.error)))?;

        info!("Configuration saved to {}", config_path.display());
        Ok(())
    }

    /// Store `panel` as the startup panel, saving only when it changed
    ///
    /// Returns whether the file was written.
    pub fn remember_start_panel(config: &mut AppConfig, panel: usize) -> Result<bool> {
        if config.preferences.start_panel == panel {
            return Ok(false);
        }
        config.preferences.start_panel = panel;
        Self::save(config)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{SettingsHomeGuard, create_test_dir};

    #[test]
    fn test_config_path_follows_env() {
        let dir = create_test_dir();
        let _guard = SettingsHomeGuard::new(&dir);

        assert_eq!(
            ConfigManager::get_config_path(),
            dir.path().join("config.json")
        );
    }

    #[test]
    fn test_load_missing_config() {
        let dir = create_test_dir();
        let _guard = SettingsHomeGuard::new(&dir);

        let config = ConfigManager::load().unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_corrupt_config_uses_defaults() {
        let dir = create_test_dir();
        let _guard = SettingsHomeGuard::new(&dir);
        std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

        let config = ConfigManager::load().unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = create_test_dir();
        let _guard = SettingsHomeGuard::new(&dir);

        let mut config = AppConfig::default();
        config.paths.params_dir = dir.path().join("params");
        config.preferences.start_panel = 5;
        ConfigManager::save(&config).unwrap();

        assert_eq!(ConfigManager::load().unwrap(), config);
        // Only the final file remains, no temp leftovers
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_remember_start_panel() {
        let dir = create_test_dir();
        let _guard = SettingsHomeGuard::new(&dir);
        let mut config = AppConfig::default();

        assert!(!ConfigManager::remember_start_panel(&mut config, 0).unwrap());
        assert!(!dir.path().join("config.json").exists());

        assert!(ConfigManager::remember_start_panel(&mut config, 3).unwrap());
        assert_eq!(ConfigManager::load().unwrap().preferences.start_panel, 3);
    }

    #[test]
    fn test_save_creates_missing_home() {
        let dir = create_test_dir();
        let nested = tempfile::TempDir::new_in(dir.path()).unwrap();
        let _guard = SettingsHomeGuard::new(&nested);
        std::fs::remove_dir(nested.path()).unwrap();

        ConfigManager::save(&AppConfig::default()).unwrap();
        assert!(nested.path().join("config.json").exists());
    }
}
