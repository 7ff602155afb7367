//! `offroad-settings` - terminal front-end for the offroad settings panel
//!
//! Opens the parameter store named in the configuration and drives the
//! settings panels from stdin/stdout.

use anyhow::{Context, Result};
use offroad_settings::{
    FileParamStore,
    config::ConfigManager,
    error::get_user_friendly_error,
    frontend::Terminal,
    panels::SettingsWindow,
    system::ProcessRunner,
    utils,
};
use std::sync::Arc;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    let home = ConfigManager::settings_home();
    utils::init_logging(&home).context("Failed to initialize logging system")?;

    let mut config = ConfigManager::load().context("Failed to load application configuration")?;
    info!(
        "Using params at {} and scripts at {}",
        config.paths.params_dir.display(),
        config.paths.scripts_dir.display()
    );

    let store = match FileParamStore::open(config.paths.params_dir.clone()) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Failed to open parameter store: {}", e);
            eprintln!("{}", get_user_friendly_error(&e));
            return Err(e).context("Failed to open parameter store");
        }
    };

    let runner = ProcessRunner::new(config.paths.clone(), config.commands.clone());
    let mut window = SettingsWindow::new(store, &config);

    let stdin = std::io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), std::io::stdout().lock());
    terminal
        .run(&mut window, &runner)
        .context("Terminal session failed")?;

    if let Err(e) = ConfigManager::remember_start_panel(&mut config, window.current_index()) {
        warn!("Failed to save configuration: {}", e);
    }

    info!("Settings closed");
    Ok(())
}
