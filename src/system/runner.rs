//! Process-backed action runner
//!
//! Maintenance scripts are started with `sh <scripts_dir>/<script>` and not
//! awaited. Reboot and power-off run the commands from the configuration.
//! Recording deletion and forced calibration are plain file operations.

use crate::config::{DevicePaths, SystemCommands};
use crate::controls::{ActionRunner, SystemAction};
use crate::error::{Result, SettingsError, StringError};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// Name of the calibration param written by forced calibration
const CALIBRATION_PARAM: &str = "CalibrationParams";

/// Runs system actions on the device
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    paths: DevicePaths,
    commands: SystemCommands,
}

impl ProcessRunner {
    /// Create a runner over the configured paths and commands
    pub fn new(paths: DevicePaths, commands: SystemCommands) -> Self {
        Self { paths, commands }
    }

    /// Absolute path of a maintenance script
    pub fn script_path(&self, script: &str) -> PathBuf {
        self.paths.scripts_dir.join(script)
    }

    /// Carry out `action`, reporting why it could not be started
    pub fn try_perform(&self, action: &SystemAction) -> Result<()> {
        match *action {
            SystemAction::Reboot => spawn_command(&self.commands.reboot, action),
            SystemAction::PowerOff => spawn_command(&self.commands.power_off, action),
            SystemAction::RunScript(script) => self.spawn_script(script),
            SystemAction::DeleteRecordings => {
                let removed = delete_regular_files(&self.paths.recordings_dir)?;
                info!(
                    "Deleted {} recordings from {}",
                    removed,
                    self.paths.recordings_dir.display()
                );
                Ok(())
            }
            SystemAction::ForceCalibration => {
                let target = self.paths.params_dir.join(CALIBRATION_PARAM);
                std::fs::copy(&self.paths.calibration_template, &target).map_err(|e| {
                    SettingsError::ActionFailed {
                        action: action.name(),
                        source: Box::new(e),
                    }
                })?;
                info!("Installed calibration into {}", target.display());
                Ok(())
            }
        }
    }

    fn spawn_script(&self, script: &str) -> Result<()> {
        let path = self.script_path(script);
        if !path.is_file() {
            return Err(SettingsError::ActionFailed {
                action: script.to_string(),
                source: StringError::new(format!("{} not found", path.display())),
            });
        }

        let mut command = Command::new("sh");
        command.arg(&path).current_dir(&self.paths.scripts_dir);
        spawn_detached(command, script)
    }
}

impl ActionRunner for ProcessRunner {
    fn perform(&self, action: &SystemAction) {
        info!("Running {}", action.name());
        if let Err(e) = self.try_perform(action) {
            warn!("{} failed: {}", action.name(), e);
        }
    }
}

fn spawn_command(argv: &[String], action: &SystemAction) -> Result<()> {
    let Some((program, args)) = argv.split_first() else {
        return Err(SettingsError::ActionFailed {
            action: action.name(),
            source: StringError::new("no command configured"),
        });
    };
    let mut command = Command::new(program);
    command.args(args);
    spawn_detached(command, &action.name())
}

/// Start `command` and reap it on a background thread
fn spawn_detached(mut command: Command, name: &str) -> Result<()> {
    let mut child = command
        .stdin(Stdio::null())
        .spawn()
        .map_err(|e| SettingsError::ActionFailed {
            action: name.to_string(),
            source: Box::new(e),
        })?;
    debug!("Started {} as pid {}", name, child.id());

    let name = name.to_string();
    std::thread::spawn(move || match child.wait() {
        Ok(status) => debug!("{} exited with {}", name, status),
        Err(e) => warn!("Lost track of {}: {}", name, e),
    });
    Ok(())
}

/// Remove every regular file directly inside `dir`, returning how many went
fn delete_regular_files(dir: &Path) -> Result<usize> {
    let mut removed = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            match std::fs::remove_file(entry.path()) {
                Ok(()) => removed += 1,
                Err(e) => warn!("Could not delete {}: {}", entry.path().display(), e),
            }
        }
    }
    Ok(removed)
}
