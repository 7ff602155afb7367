//! Terminal front-end
//!
//! A minimal stand-in for the touch screen: each panel is printed as a
//! numbered list of rows and edited with short commands.

pub mod command;
pub mod terminal;

pub use command::{Command, parse_command};
pub use terminal::{Terminal, TerminalConfirmer};
