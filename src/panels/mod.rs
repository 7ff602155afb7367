//! Settings panels
//!
//! `schema` holds the static descriptors for every row; `window` turns them
//! into live controls grouped into the six sidebar panels.

pub mod schema;
pub mod window;

pub use window::{PANEL_NAMES, Panel, SettingsWindow};
