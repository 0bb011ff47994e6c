//! The game session: table manager, player actions and snapshots.
//!
//! ## Key Types
//!
//! - `Manager`: Owns the hands, pile and burn pile of one game
//! - `PlayerAction`: A play or a slap by one player
//! - `Outcome`: What an action did (`Normal`, `Penalty`, `PileTaken`)
//! - `ActionRecord`: History entry for an applied action
//! - `TableSnapshot`: Serializable capture of a session

pub mod action;
pub mod manager;
pub mod snapshot;

pub use action::{ActionRecord, Outcome, PlayerAction};
pub use manager::Manager;
pub use snapshot::TableSnapshot;
