//! Core engine types: seats, configuration, errors, RNG.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{TableConfig, CARDS_PER_DECK, MAX_DECKS, MAX_PLAYERS};
pub use error::{CardError, ConfigError, TableError};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
