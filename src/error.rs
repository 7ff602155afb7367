//! Error types for the settings panel
//!
//! Controls never surface errors to their callers; these types cover the
//! collaborators around them (parameter store, configuration, logging setup)
//! and are propagated with `?` up to the binary.
//!
//! Error variants use `#[source]` to preserve error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the settings panel
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Parameter key is empty or contains characters that cannot name a param file
    #[error("Invalid parameter key: {0:?}")]
    InvalidParamKey(String),

    /// Parameter store could not be opened or accessed
    #[error("Parameter store error at {}: {source}", path.display())]
    ParamStoreError {
        /// Path of the store directory or param file involved
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// System action could not be started
    #[error("Failed to run {action}: {source}")]
    ActionFailed {
        /// Human readable action name
        action: String,
        /// Underlying cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Convert an error to a message suitable for showing on the device screen
pub fn get_user_friendly_error(error: &SettingsError) -> String {
    match error {
        SettingsError::InvalidParamKey(key) => format!(
            "Parameter name {key:?} is not valid.\n\n\
             Parameter names may only contain letters, digits and underscores."
        ),
        SettingsError::ParamStoreError { path, .. } => format!(
            "Unable to access the parameter store.\n\n\
             Please check that {} exists and is writable.",
            path.display()
        ),
        SettingsError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             Your settings may not persist.\n\
             Check that OPKR_SETTINGS_HOME points to a writable directory."
            .to_string(),
        SettingsError::ActionFailed { action, .. } => format!(
            "Could not start {action}.\n\n\
             The helper script may be missing from the device."
        ),
        SettingsError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and free space on /data."
            )
        }
        SettingsError::JsonError(e) => {
            format!(
                "Configuration file is corrupted:\n\n{e}\n\n\
                 The application will use default settings."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = SettingsError::InvalidParamKey("../etc".to_string());
        assert_eq!(error.to_string(), "Invalid parameter key: \"../etc\"");
    }

    #[test]
    fn test_user_friendly_messages() {
        let error = SettingsError::InvalidParamKey("bad key".to_string());
        let message = get_user_friendly_error(&error);
        assert!(message.contains("bad key"));
        assert!(message.contains("underscores"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: SettingsError = io_error.into();
        assert!(matches!(error, SettingsError::IoError(_)));
    }

    #[test]
    fn test_param_store_error_keeps_source() {
        use std::error::Error as _;

        let error = SettingsError::ParamStoreError {
            path: PathBuf::from("/data/params/d"),
            source: StringError::new("read-only file system"),
        };
        assert!(error.to_string().contains("/data/params/d"));
        assert_eq!(
            error.source().map(ToString::to_string).as_deref(),
            Some("read-only file system")
        );
    }

    #[test]
    fn test_action_failed_user_friendly() {
        let error = SettingsError::ActionFailed {
            action: "gitpull.sh".to_string(),
            source: StringError::new("not found"),
        };
        let message = get_user_friendly_error(&error);
        assert!(message.contains("gitpull.sh"));
        assert!(message.contains("missing"));
    }

    #[test]
    fn test_config_error_display() {
        let error = SettingsError::ConfigError(StringError::new("bad path"));
        assert_eq!(error.to_string(), "Configuration error: bad path");
    }
}
