//! # rat-screw
//!
//! Rules engine for Egyptian Rat Screw.
//!
//! Players take turns playing cards onto a shared pile. Anyone may slap the
//! pile when it shows a recognised pattern to take every card on it; playing
//! out of turn or slapping a plain pile costs a card to the burn pile.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: No rendering, timing or input devices. A front-end
//!    calls one action per player input and reads the resulting state.
//!
//! 2. **Outcomes, not errors**: Illegal plays are routine and are reported
//!    as `Outcome::Penalty`. `Err` is reserved for bad input at the API
//!    boundary and broken invariants.
//!
//! 3. **Reproducible**: Shuffling is the only randomness, and a seeded
//!    table deals identically every time.
//!
//! ## Modules
//!
//! - `core`: Seats, configuration, errors, RNG
//! - `cards`: Cards and decks
//! - `rules`: Slap patterns and game end
//! - `table`: The session manager, actions, snapshots
//! - `input`: Key bindings and the text command parser

pub mod cards;
pub mod core;
pub mod input;
pub mod rules;
pub mod table;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CardError, ConfigError, GameRng, GameRngState, PlayerId, PlayerMap, TableConfig, TableError,
};

pub use crate::cards::{Card, Deck, Suit};

pub use crate::rules::{GameResult, SlapRule};

pub use crate::table::{ActionRecord, Manager, Outcome, PlayerAction, TableSnapshot};

pub use crate::input::{Command, CommandError, InputBindings};
