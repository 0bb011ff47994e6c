//! Input handling for front-ends.
//!
//! - `bindings`: per-session key to action map
//! - `command`: line command parser used by the text driver

pub mod bindings;
pub mod command;

pub use bindings::InputBindings;
pub use command::{Command, CommandError};
