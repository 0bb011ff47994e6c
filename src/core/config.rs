//! Table configuration.
//!
//! A `TableConfig` fixes the number of seats, the number of 52-card decks
//! shuffled together, and optionally the shuffle seed. It is fixed for a
//! session and only changes through `Manager::reset`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Largest supported table; `PlayerId` is a `u8`.
pub const MAX_PLAYERS: usize = 255;

/// Most standard decks a table will shuffle together.
pub const MAX_DECKS: usize = 64;

/// Cards in a single standard deck.
pub const CARDS_PER_DECK: usize = 52;

/// Session configuration.
///
/// ## Example
///
/// ```
/// use rat_screw::core::TableConfig;
///
/// let config = TableConfig::default().with_players(4).with_decks(2).with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.total_cards(), 104);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of seats (2-255).
    pub player_count: usize,

    /// Number of standard decks shuffled together (1-64).
    pub deck_count: usize,

    /// Shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            deck_count: 1,
            seed: None,
        }
    }
}

impl TableConfig {
    /// Create a configuration for the given table size.
    #[must_use]
    pub fn new(player_count: usize, deck_count: usize) -> Self {
        Self {
            player_count,
            deck_count,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_players(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    #[must_use]
    pub fn with_decks(mut self, deck_count: usize) -> Self {
        self.deck_count = deck_count;
        self
    }

    /// Fix the shuffle seed, making every deal reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the table size is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count < 2 {
            return Err(ConfigError::TooFewPlayers(self.player_count));
        }
        if self.player_count > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers(self.player_count));
        }
        if self.deck_count == 0 {
            return Err(ConfigError::NoDecks);
        }
        if self.deck_count > MAX_DECKS {
            return Err(ConfigError::TooManyDecks(self.deck_count));
        }
        Ok(())
    }

    /// Apply reset overrides. `None` and zero keep the current value.
    #[must_use]
    pub fn overridden(self, player_count: Option<usize>, deck_count: Option<usize>) -> Self {
        Self {
            player_count: player_count.filter(|&n| n > 0).unwrap_or(self.player_count),
            deck_count: deck_count.filter(|&n| n > 0).unwrap_or(self.deck_count),
            seed: self.seed,
        }
    }

    /// Number of cards in play for this configuration. Saturates on an
    /// unvalidated deck count.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        CARDS_PER_DECK.saturating_mul(self.deck_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TableConfig::default();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.deck_count, 1);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            TableConfig::new(1, 1).validate(),
            Err(ConfigError::TooFewPlayers(1))
        );
        assert_eq!(
            TableConfig::new(256, 1).validate(),
            Err(ConfigError::TooManyPlayers(256))
        );
        assert_eq!(TableConfig::new(2, 0).validate(), Err(ConfigError::NoDecks));
        assert_eq!(
            TableConfig::new(2, 65).validate(),
            Err(ConfigError::TooManyDecks(65))
        );
        assert!(TableConfig::new(255, 3).validate().is_ok());
        assert!(TableConfig::new(2, MAX_DECKS).validate().is_ok());
    }

    #[test]
    fn test_total_cards_does_not_overflow() {
        assert_eq!(TableConfig::new(2, 3).total_cards(), 156);
        assert_eq!(TableConfig::new(2, usize::MAX).total_cards(), usize::MAX);
    }

    #[test]
    fn test_overridden_keeps_prior_values() {
        let config = TableConfig::new(3, 2).with_seed(9);

        assert_eq!(config.overridden(None, None), config);
        assert_eq!(config.overridden(Some(0), Some(0)), config);

        let changed = config.overridden(Some(5), None);
        assert_eq!(changed.player_count, 5);
        assert_eq!(changed.deck_count, 2);
        assert_eq!(changed.seed, Some(9));
    }

    #[test]
    fn test_serialization() {
        let config = TableConfig::new(4, 2).with_seed(42);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TableConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
