//! Table rules that only read state.
//!
//! - `slap`: which patterns on the pile make a slap legal
//! - `result`: when the game is over

pub mod result;
pub mod slap;

pub use result::GameResult;
pub use slap::{matching_rule, matching_rules, SlapRule};
