//! Serializable table snapshots.
//!
//! A snapshot holds everything needed to resume a session: configuration,
//! turn, every deck, and the RNG position. Decks are persistent vectors, so
//! taking a snapshot is cheap.

use serde::{Deserialize, Serialize};

use crate::cards::Deck;
use crate::core::{GameRngState, PlayerId, PlayerMap, TableConfig, TableError};

/// A captured table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub config: TableConfig,
    pub turn: PlayerId,
    pub pile: Deck,
    pub burn: Deck,
    pub hands: PlayerMap<Deck>,
    pub rng: GameRngState,
}

impl TableSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TableError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode. The result is not validated until restored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TableError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Check the table invariants a live `Manager` relies on.
    pub fn validate(&self) -> Result<(), TableError> {
        self.config.validate()?;

        let seats = self.hands.player_count();
        if seats != self.config.player_count {
            return Err(TableError::CorruptSnapshot(format!(
                "{seats} hands for {} players",
                self.config.player_count
            )));
        }

        if self.turn.index() >= seats {
            return Err(TableError::CorruptSnapshot(format!(
                "turn {} is not seated",
                self.turn
            )));
        }

        let held: usize = self.hands.values().map(Deck::len).sum();
        let total = held + self.pile.len() + self.burn.len();
        if total != self.config.total_cards() {
            return Err(TableError::CorruptSnapshot(format!(
                "{total} cards in play, expected {}",
                self.config.total_cards()
            )));
        }

        if self.hands[self.turn].is_empty() && held > 0 {
            return Err(TableError::CorruptSnapshot(format!(
                "turn {} has no cards while others do",
                self.turn
            )));
        }

        Ok(())
    }
}
