//! Logging system initialization
//!
//! Logs go to `<home>/logs/app.log`. The previous session logs are kept as
//! `app.log.1` (newest) through `app.log.9` (oldest), shifted on every start.

use crate::error::{Result, SettingsError, StringError};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Number of previous session logs kept next to `app.log`
const MAX_LOG_FILES: u8 = 9;

/// Directory holding the log files for a settings home
pub fn log_dir(home: &Path) -> PathBuf {
    home.join("logs")
}

/// Initialize the logging system
///
/// Level defaults to INFO and can be overridden with `RUST_LOG`.
pub fn init_logging(home: &Path) -> Result<()> {
    let log_dir = log_dir(home);
    std::fs::create_dir_all(&log_dir)?;
    rotate_logs_on_startup(&log_dir.join("app.log"))?;

    // Rotation happens once per session above, never while running
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("app")
        .filename_suffix("log")
        .build(&log_dir)
        .map_err(|e| SettingsError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| SettingsError::ConfigError(Box::new(e)))?;

    tracing::info!(
        "offroad-settings v{} logging to {}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );
    Ok(())
}

/// Shift `app.log` to `app.log.1`, `app.log.1` to `app.log.2` and so on,
/// dropping whatever was in `app.log.9`.
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let (Some(dir), Some(name)) = (log_path.parent(), log_path.file_name()) else {
        return Err(SettingsError::ConfigError(StringError::new(format!(
            "Invalid log path {}",
            log_path.display()
        ))));
    };
    let name = name.to_string_lossy();
    let numbered = |i: u8| dir.join(format!("{name}.{i}"));

    let oldest = numbered(MAX_LOG_FILES);
    if oldest.exists() {
        std::fs::remove_file(&oldest)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let from = numbered(i);
        if from.exists() {
            std::fs::rename(&from, numbered(i + 1))?;
        }
    }

    std::fs::rename(log_path, numbered(1))?;
    Ok(())
}
