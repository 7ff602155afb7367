//! Configuration data models
//!
//! Paths and commands describing the device layout. Every field has a default
//! matching a stock device, so a partial or missing `config.json` still works.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Device paths
    pub paths: DevicePaths,
    /// Power management commands
    pub commands: SystemCommands,
    /// User preferences
    pub preferences: UserPreferences,
    /// Hardware features of the device
    pub hardware: HardwareFeatures,
}

/// Locations of the parameter store, helper scripts and data directories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevicePaths {
    /// Directory holding one file per parameter
    pub params_dir: PathBuf,
    /// Directory holding the maintenance shell scripts
    pub scripts_dir: PathBuf,
    /// Directory holding recorded videos
    pub recordings_dir: PathBuf,
    /// Bundled calibration installed by "force calibration"
    pub calibration_template: PathBuf,
    /// File whose contents are shown as the OS version
    pub os_version_file: PathBuf,
}

/// Commands executed for reboot and power-off
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemCommands {
    /// Program and arguments to reboot the device
    pub reboot: Vec<String>,
    /// Program and arguments to power the device off
    pub power_off: Vec<String>,
}

/// Optional hardware the panels expose settings for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HardwareFeatures {
    /// Device has a wide-angle road camera
    pub wide_camera: bool,
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    /// Panel opened on startup (0 = Device)
    pub start_panel: usize,
    /// Whether the car is considered off when the UI starts
    pub start_offroad: bool,
}

impl Default for DevicePaths {
    fn default() -> Self {
        Self {
            params_dir: PathBuf::from("/data/params/d"),
            scripts_dir: PathBuf::from("/data/openpilot"),
            recordings_dir: PathBuf::from("/storage/emulated/0/videos"),
            calibration_template: PathBuf::from(
                "/data/openpilot/selfdrive/assets/addon/param/CalibrationParams",
            ),
            os_version_file: PathBuf::from("/VERSION"),
        }
    }
}

impl Default for SystemCommands {
    fn default() -> Self {
        Self {
            reboot: vec!["reboot".to_string()],
            power_off: vec!["svc".to_string(), "power".to_string(), "shutdown".to_string()],
        }
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            start_panel: 0,
            start_offroad: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.paths.params_dir, PathBuf::from("/data/params/d"));
        assert_eq!(config.commands.reboot, vec!["reboot".to_string()]);
        assert_eq!(config.preferences.start_panel, 0);
    }

    #[test]
    fn test_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{ "paths": { "params_dir": "/tmp/params" } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.paths.params_dir, PathBuf::from("/tmp/params"));
        assert_eq!(config.paths.scripts_dir, PathBuf::from("/data/openpilot"));
        assert!(config.preferences.start_offroad);
        assert!(!config.hardware.wide_camera);
    }

    #[test]
    fn test_hardware_section() {
        let json = r#"{ "hardware": { "wide_camera": true } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert!(config.hardware.wide_camera);
        assert_eq!(config.preferences, UserPreferences::default());
    }
}
