//! Error types for card construction, configuration and table actions.
//!
//! Routine game-flow results (illegal plays, failed slaps) are not errors;
//! they are reported through [`Outcome`](crate::table::Outcome). The types
//! here cover broken invariants and bad input at the API boundary.

use thiserror::Error;

use super::player::PlayerId;

/// Failure to construct a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `1..=13`.
    #[error("invalid rank for card: {rank} must be between 1 and 13 inclusive")]
    InvalidRank { rank: u8 },
}

/// Invalid table configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least 2 players are required, got {0}")]
    TooFewPlayers(usize),

    #[error("at most 255 players are supported, got {0}")]
    TooManyPlayers(usize),

    #[error("at least 1 deck is required")]
    NoDecks,

    #[error("at most 64 decks are supported, got {0}")]
    TooManyDecks(usize),
}

/// Failure of a table operation.
#[derive(Debug, Error)]
pub enum TableError {
    /// The player whose turn it is has no cards to play.
    ///
    /// Turn advancement never hands the turn to an empty hand, so this
    /// indicates a bug in the engine rather than a player mistake.
    #[error("internal inconsistency: it is {player}'s turn but their hand is empty")]
    InternalInconsistency { player: PlayerId },

    /// The action names a seat that does not exist at this table.
    #[error("{player} is not seated at a table of {player_count}")]
    UnknownPlayer { player: PlayerId, player_count: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// A restored snapshot breaks a table invariant.
    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    #[error(transparent)]
    Encoding(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = CardError::InvalidRank { rank: 14 };
        assert_eq!(
            err.to_string(),
            "invalid rank for card: 14 must be between 1 and 13 inclusive"
        );

        let err = TableError::InternalInconsistency { player: PlayerId::new(1) };
        assert!(err.to_string().contains("Player 1"));

        let err: TableError = ConfigError::TooFewPlayers(1).into();
        assert!(matches!(err, TableError::InvalidConfig(ConfigError::TooFewPlayers(1))));
    }
}
