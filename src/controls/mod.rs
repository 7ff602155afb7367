//! Settings controls
//!
//! Every row on a settings panel is a thin binding between a UI affordance
//! and one or more keys in the parameter store.
//!
//! # Overview
//!
//! - `Stepper`: +/- control over a clamped integer, shown raw, scaled or as a label
//! - `ParamToggle`: on/off switch over a boolean parameter
//! - `ConfirmAction`: button that asks before running disruptive effects
//! - `ParamButton`: button that sets a flag without asking
//! - `ParamLabel` / `Header`: read-only rows
//! - `CarSelector`: manual vehicle model override
//! - `SshKeys`: installed GitHub SSH keys
//!
//! Controls receive the store at construction (`SharedParams`), never reach
//! for a global, and re-read the store after every change so the display can
//! not drift from what is persisted.

pub mod action;
pub mod button;
pub mod car;
pub mod label;
pub mod ssh;
pub mod stepper;
pub mod toggle;

pub use action::{ActionRunner, ActionSpec, ConfirmAction, Confirmer, Effect, SystemAction};
pub use button::{ButtonEffect, ButtonSpec, ParamButton};
pub use car::CarSelector;
pub use label::{Header, ParamLabel};
pub use ssh::SshKeys;
pub use stepper::{DisplayTransform, Stepper, StepperSpec};
pub use toggle::{ParamToggle, ToggleSpec};

/// One row of a settings panel
#[derive(Debug)]
pub enum Control {
    /// Section caption
    Header(Header),
    /// Read-only value
    Label(ParamLabel),
    /// Boolean switch
    Toggle(ParamToggle),
    /// Bounded +/- control
    Stepper(Stepper),
    /// Confirmation-gated action
    Action(ConfirmAction),
    /// Unconfirmed flag button
    Button(ParamButton),
    /// Vehicle model override
    Car(CarSelector),
    /// GitHub SSH keys
    Ssh(SshKeys),
}

impl Control {
    /// Row title
    pub fn title(&self) -> &str {
        match self {
            Self::Header(h) => &h.title,
            Self::Label(l) => l.title(),
            Self::Toggle(t) => t.spec().title,
            Self::Stepper(s) => s.spec().title,
            Self::Action(a) => a.spec().title,
            Self::Button(b) => b.spec().title,
            Self::Car(_) => "Force car recognition",
            Self::Ssh(_) => "SSH Keys",
        }
    }

    /// Text shown on the right-hand side of the row
    pub fn value(&self) -> String {
        match self {
            Self::Header(h) => h.note.clone(),
            Self::Label(l) => l.value().to_string(),
            Self::Toggle(t) => {
                let state = if t.is_on() { "on" } else { "off" };
                if t.is_enabled() {
                    state.to_string()
                } else {
                    format!("{state} (locked)")
                }
            }
            Self::Stepper(s) => s.label().to_string(),
            Self::Action(a) => {
                if a.is_enabled() {
                    format!("[{}]", a.spec().button)
                } else {
                    format!("[{}] (offroad only)", a.spec().button)
                }
            }
            Self::Button(b) => format!("[{}]", b.caption()),
            Self::Car(c) => {
                if c.is_set() {
                    format!("{} [Remove]", c.label())
                } else {
                    "[Set]".to_string()
                }
            }
            Self::Ssh(k) => match k.username() {
                Some(user) => format!("{user} [Remove]"),
                None => "not installed".to_string(),
            },
        }
    }

    /// Re-read the row from the store
    pub fn render(&mut self) {
        match self {
            Self::Header(_) | Self::Action(_) => {}
            Self::Label(l) => l.render(),
            Self::Toggle(t) => t.render(),
            Self::Stepper(s) => s.render(),
            Self::Button(b) => b.render(),
            Self::Car(c) => c.render(),
            Self::Ssh(k) => k.render(),
        }
    }

    /// Propagate the offroad state to rows that depend on it
    pub fn set_offroad(&mut self, offroad: bool) {
        match self {
            Self::Action(a) => a.set_offroad(offroad),
            Self::Button(b) => b.set_offroad(offroad),
            _ => {}
        }
    }

    /// Stepper key, if this row is a stepper
    pub fn stepper_key(&self) -> Option<&'static str> {
        match self {
            Self::Stepper(s) => Some(s.spec().key),
            _ => None,
        }
    }
}
