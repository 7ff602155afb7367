//! Forced vehicle recognition
//!
//! When fingerprinting fails the user can pick the car model by hand. Applying
//! the choice writes `CarModel` and `CarModelAbb` and runs the helper script
//! that installs the selection; clearing removes both keys.

use super::action::{ActionRunner, SystemAction};
use crate::params::SharedParams;
use tracing::{info, warn};

/// Parameter read by the vehicle interface
pub const CAR_MODEL_KEY: &str = "CarModel";
/// Parameter shown on the settings row
pub const CAR_MODEL_ABB_KEY: &str = "CarModelAbb";
/// Script applying a forced car model
pub const CAR_FORCE_SET_SCRIPT: &str = "car_force_set.sh";

/// Live car selection row
pub struct CarSelector {
    models: &'static [&'static str],
    params: SharedParams,
    pending: Option<&'static str>,
    label: String,
}

impl CarSelector {
    /// Build the row over the supported model list
    pub fn new(models: &'static [&'static str], params: SharedParams) -> Self {
        let mut selector = Self {
            models,
            params,
            pending: None,
            label: String::new(),
        };
        selector.render();
        selector
    }

    /// Supported model names
    pub fn models(&self) -> &'static [&'static str] {
        self.models
    }

    /// Displayed model name, empty when nothing is forced
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether a model is pending or stored
    pub fn is_set(&self) -> bool {
        !self.label.is_empty()
    }

    /// Choose a model without applying it; unknown names are ignored
    pub fn select(&mut self, model: &str) -> bool {
        match self.models.iter().find(|m| m.eq_ignore_ascii_case(model)) {
            Some(found) => {
                self.pending = Some(*found);
                self.render();
                true
            }
            None => {
                warn!("Unknown car model {:?}", model);
                false
            }
        }
    }

    /// Store the pending model and run the helper script
    ///
    /// Without a pending choice this behaves like `clear`.
    pub fn apply(&mut self, runner: &dyn ActionRunner) {
        let Some(model) = self.pending else {
            self.clear();
            return;
        };
        info!("Forcing car model {}", model);
        self.params.put(CAR_MODEL_KEY, model);
        self.params.put(CAR_MODEL_ABB_KEY, model);
        runner.perform(&SystemAction::RunScript(CAR_FORCE_SET_SCRIPT));
        self.render();
    }

    /// Forget the forced model
    pub fn clear(&mut self) {
        self.pending = None;
        self.params.remove(CAR_MODEL_KEY);
        self.params.remove(CAR_MODEL_ABB_KEY);
        self.render();
    }

    /// Show the pending choice, else the stored one
    pub fn render(&mut self) {
        self.label = match self.pending {
            Some(model) => model.to_string(),
            None => self.params.get(CAR_MODEL_ABB_KEY),
        };
    }
}

impl std::fmt::Debug for CarSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarSelector")
            .field("pending", &self.pending)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{MemoryParamStore, ParamStore};
    use crate::test_utils::RecordingRunner;
    use std::sync::Arc;

    const MODELS: &[&str] = &["GENESIS", "K5", "SONATA"];

    #[test]
    fn apply_writes_both_keys_and_runs_script() {
        let store = Arc::new(MemoryParamStore::new());
        let runner = RecordingRunner::default();
        let mut selector = CarSelector::new(MODELS, store.clone());

        assert!(selector.select("k5"));
        assert_eq!(selector.label(), "K5");
        assert!(!store.contains(CAR_MODEL_KEY), "select alone does not write");

        selector.apply(&runner);
        assert_eq!(store.get(CAR_MODEL_KEY), "K5");
        assert_eq!(store.get(CAR_MODEL_ABB_KEY), "K5");
        assert_eq!(
            runner.performed(),
            vec![SystemAction::RunScript(CAR_FORCE_SET_SCRIPT)]
        );
    }

    #[test]
    fn unknown_model_is_rejected() {
        let store = Arc::new(MemoryParamStore::new());
        let mut selector = CarSelector::new(MODELS, store);
        assert!(!selector.select("TRABANT"));
        assert!(!selector.is_set());
    }

    #[test]
    fn stored_model_is_shown_and_cleared() {
        let store = Arc::new(MemoryParamStore::with_values([
            (CAR_MODEL_KEY, "SONATA"),
            (CAR_MODEL_ABB_KEY, "SONATA"),
        ]));
        let runner = RecordingRunner::default();
        let mut selector = CarSelector::new(MODELS, store.clone());
        assert_eq!(selector.label(), "SONATA");

        // Applying with nothing pending clears the forced model
        selector.apply(&runner);
        assert!(!store.contains(CAR_MODEL_KEY));
        assert!(!store.contains(CAR_MODEL_ABB_KEY));
        assert!(!selector.is_set());
        assert!(runner.performed().is_empty());
    }
}
