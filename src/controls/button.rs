//! Unconfirmed buttons that set boolean parameters
//!
//! Used for harmless view switches such as previewing the driver camera,
//! where a confirmation prompt would only get in the way.

use crate::params::SharedParams;

/// What pressing the button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEffect {
    /// Invert the flag
    Flip,
    /// Set the flag to `true`
    Set,
}

/// Static description of a parameter button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSpec {
    /// Boolean parameter key
    pub key: &'static str,
    /// Row title
    pub title: &'static str,
    /// Help text
    pub description: &'static str,
    /// Caption while the flag is off
    pub caption_off: &'static str,
    /// Caption while the flag is on
    pub caption_on: &'static str,
    /// Press behaviour
    pub effect: ButtonEffect,
    /// Only usable while the car is off
    pub offroad_only: bool,
}

/// Live parameter button
pub struct ParamButton {
    spec: ButtonSpec,
    params: SharedParams,
    caption: &'static str,
    enabled: bool,
}

impl ParamButton {
    /// Build the button and render its caption
    pub fn new(spec: ButtonSpec, params: SharedParams) -> Self {
        let mut button = Self {
            spec,
            params,
            caption: spec.caption_off,
            enabled: true,
        };
        button.render();
        button
    }

    /// Descriptor this control was built from
    pub fn spec(&self) -> &ButtonSpec {
        &self.spec
    }

    /// Current caption
    pub fn caption(&self) -> &str {
        self.caption
    }

    /// Whether the button accepts presses
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Track the offroad state
    pub fn set_offroad(&mut self, offroad: bool) {
        if self.spec.offroad_only {
            self.enabled = offroad;
        }
    }

    /// Apply the button's effect
    pub fn press(&mut self) {
        if !self.enabled {
            return;
        }
        let next = match self.spec.effect {
            ButtonEffect::Flip => !self.params.get_bool(self.spec.key),
            ButtonEffect::Set => true,
        };
        self.params.put_bool(self.spec.key, next);
        self.render();
    }

    /// Re-read the caption from the store
    pub fn render(&mut self) {
        self.caption = if self.params.get_bool(self.spec.key) {
            self.spec.caption_on
        } else {
            self.spec.caption_off
        };
    }
}

impl std::fmt::Debug for ParamButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParamButton")
            .field("key", &self.spec.key)
            .field("caption", &self.caption)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{MemoryParamStore, ParamStore};
    use std::sync::Arc;

    const PREVIEW: ButtonSpec = ButtonSpec {
        key: "IsOpenpilotViewEnabled",
        title: "Driving view preview",
        description: "",
        caption_off: "Preview",
        caption_on: "Stop preview",
        effect: ButtonEffect::Flip,
        offroad_only: false,
    };

    #[test]
    fn flip_button_toggles_caption() {
        let store = Arc::new(MemoryParamStore::new());
        let mut button = ParamButton::new(PREVIEW, store.clone());
        assert_eq!(button.caption(), "Preview");

        button.press();
        assert!(store.get_bool("IsOpenpilotViewEnabled"));
        assert_eq!(button.caption(), "Stop preview");

        button.press();
        assert!(!store.get_bool("IsOpenpilotViewEnabled"));
        assert_eq!(button.caption(), "Preview");
    }

    #[test]
    fn set_button_only_turns_on() {
        let spec = ButtonSpec {
            key: "IsDriverViewEnabled",
            effect: ButtonEffect::Set,
            offroad_only: true,
            ..PREVIEW
        };
        let store = Arc::new(MemoryParamStore::new());
        let mut button = ParamButton::new(spec, store.clone());

        button.press();
        button.press();
        assert!(store.get_bool("IsDriverViewEnabled"));

        button.set_offroad(false);
        store.put_bool("IsDriverViewEnabled", false);
        button.press();
        assert!(!store.get_bool("IsDriverViewEnabled"));
    }
}
