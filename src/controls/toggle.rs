//! Boolean parameter toggles

use crate::params::SharedParams;
use tracing::debug;

/// Static description of a toggle row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleSpec {
    /// Boolean parameter key
    pub key: &'static str,
    /// Row title
    pub title: &'static str,
    /// Help text
    pub description: &'static str,
    /// When this flag is set the toggle is locked
    pub locked_by: Option<&'static str>,
}

impl ToggleSpec {
    /// Toggle without a lock
    pub const fn new(key: &'static str, title: &'static str, description: &'static str) -> Self {
        Self {
            key,
            title,
            description,
            locked_by: None,
        }
    }

    /// Lock the toggle while `lock_key` is set
    pub const fn locked_by(mut self, lock_key: &'static str) -> Self {
        self.locked_by = Some(lock_key);
        self
    }
}

/// Live toggle bound to a boolean parameter
pub struct ParamToggle {
    spec: ToggleSpec,
    params: SharedParams,
    on: bool,
    enabled: bool,
}

impl ParamToggle {
    /// Build the toggle, reading its state and lock from the store
    pub fn new(spec: ToggleSpec, params: SharedParams) -> Self {
        let enabled = spec.locked_by.is_none_or(|lock| !params.get_bool(lock));
        let mut toggle = Self {
            spec,
            params,
            on: false,
            enabled,
        };
        toggle.render();
        toggle
    }

    /// Descriptor this control was built from
    pub fn spec(&self) -> &ToggleSpec {
        &self.spec
    }

    /// Displayed state
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Whether the toggle accepts changes
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Lock or unlock the toggle
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flip the stored flag; locked toggles ignore the request
    pub fn toggle(&mut self) {
        if !self.enabled {
            debug!("{} is locked", self.spec.key);
            return;
        }
        let next = !self.params.get_bool(self.spec.key);
        self.params.put_bool(self.spec.key, next);
        self.render();
    }

    /// Re-read the flag from the store
    pub fn render(&mut self) {
        self.on = self.params.get_bool(self.spec.key);
    }
}

impl std::fmt::Debug for ParamToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParamToggle")
            .field("key", &self.spec.key)
            .field("on", &self.on)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
