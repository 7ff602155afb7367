//! Confirmation-gated actions
//!
//! Disruptive operations (reboot, power-off, maintenance scripts, deleting
//! recordings, resetting parameters) only run after the user answers a
//! yes/no prompt. Declining leaves the store and the filesystem untouched.
//!
//! Actions are fire-and-forget: `ActionRunner::perform` returns nothing and
//! the outcome of a script or a reboot is never reported back to the panel.

use crate::params::SharedParams;
use tracing::info;

/// Blocking yes/no prompt shown before a destructive action
///
/// Only one prompt is active at a time; callers run on the UI thread.
pub trait Confirmer {
    /// Show `prompt` and return whether the user accepted
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// External side effects outside the parameter store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemAction {
    /// Restart the device
    Reboot,
    /// Power the device off
    PowerOff,
    /// Run a maintenance script from the scripts directory, without arguments
    RunScript(&'static str),
    /// Delete every recorded video file
    DeleteRecordings,
    /// Install the bundled calibration so the system can engage without driving
    ForceCalibration,
}

impl SystemAction {
    /// Short name used in logs
    pub fn name(self) -> String {
        match self {
            Self::Reboot => "reboot".to_string(),
            Self::PowerOff => "power off".to_string(),
            Self::RunScript(script) => script.to_string(),
            Self::DeleteRecordings => "delete recordings".to_string(),
            Self::ForceCalibration => "force calibration".to_string(),
        }
    }
}

/// Capability to carry out system actions
///
/// Deliberately returns no result: failures are logged by the implementation
/// and nothing is reported back to the control.
pub trait ActionRunner {
    /// Start the action
    fn perform(&self, action: &SystemAction);
}

/// One step executed by a confirmed action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Delete a parameter
    Remove(&'static str),
    /// Set a boolean parameter
    PutBool(&'static str, bool),
    /// Set a string parameter
    Put(&'static str, &'static str),
    /// Hand an action to the runner
    System(SystemAction),
}

/// Static description of a confirmation-gated button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSpec {
    /// Row title
    pub title: &'static str,
    /// Button caption
    pub button: &'static str,
    /// Help text shown under the row
    pub description: &'static str,
    /// Question asked before anything happens
    pub prompt: &'static str,
    /// Steps run in order once confirmed
    pub effects: &'static [Effect],
    /// Only usable while the car is off
    pub offroad_only: bool,
}

/// Live confirmation-gated button
pub struct ConfirmAction {
    spec: ActionSpec,
    params: SharedParams,
    enabled: bool,
}

impl ConfirmAction {
    /// Build the control from its descriptor
    pub fn new(spec: ActionSpec, params: SharedParams) -> Self {
        Self {
            spec,
            params,
            enabled: true,
        }
    }

    /// Descriptor this control was built from
    pub fn spec(&self) -> &ActionSpec {
        &self.spec
    }

    /// Whether the button currently accepts presses
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Track the offroad state; offroad-only buttons are disabled while driving
    pub fn set_offroad(&mut self, offroad: bool) {
        if self.spec.offroad_only {
            self.enabled = offroad;
        }
    }

    /// Ask for confirmation and run every effect exactly once if accepted
    ///
    /// Returns whether the effects ran. A disabled button or a declined prompt
    /// returns `false` with no side effect.
    pub fn invoke(&self, confirmer: &mut dyn Confirmer, runner: &dyn ActionRunner) -> bool {
        if !self.enabled {
            info!("{} is disabled while onroad", self.spec.title);
            return false;
        }

        if !confirmer.confirm(self.spec.prompt) {
            info!("{} declined", self.spec.title);
            return false;
        }

        info!("{} confirmed", self.spec.title);
        for effect in self.spec.effects {
            match *effect {
                Effect::Remove(key) => self.params.remove(key),
                Effect::PutBool(key, value) => self.params.put_bool(key, value),
                Effect::Put(key, value) => self.params.put(key, value),
                Effect::System(action) => runner.perform(&action),
            }
        }
        true
    }
}

impl std::fmt::Debug for ConfirmAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfirmAction")
            .field("title", &self.spec.title)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
