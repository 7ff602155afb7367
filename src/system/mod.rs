//! System side effects
//!
//! Everything a confirmed action can do outside the parameter store goes
//! through `ActionRunner`; `ProcessRunner` is the implementation used on the
//! device.

pub mod runner;

pub use runner::ProcessRunner;
