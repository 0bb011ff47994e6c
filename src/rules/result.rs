//! Game end detection.

use serde::{Deserialize, Serialize};

use super::slap::matching_rule;
use crate::cards::Deck;
use crate::core::{PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One player holds every card.
    Winner(PlayerId),
    /// Every hand is empty and the pile can't be slapped: nobody can move.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// Decide the game from the table's decks.
    ///
    /// A player wins once the pile and burn pile are empty and theirs is the
    /// only hand holding cards. While anything sits on the pile another
    /// player can still slap their way back in.
    #[must_use]
    pub fn decide(hands: &PlayerMap<Deck>, pile: &Deck, burn: &Deck) -> Option<Self> {
        let mut holders = hands.iter().filter(|(_, hand)| !hand.is_empty());
        let first = holders.next();

        if first.is_none() {
            return matching_rule(pile).is_none().then_some(GameResult::Draw);
        }
        if !pile.is_empty() || !burn.is_empty() {
            return None;
        }
        match (first, holders.next()) {
            (Some((player, _)), None) => Some(GameResult::Winner(player)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Suit};

    fn deck(n: u8) -> Deck {
        (1..=n).map(|r| Card::new(Suit::Spades, r).unwrap()).collect()
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert!(!GameResult::Draw.is_winner(PlayerId::new(0)));
    }

    #[test]
    fn test_winner() {
        let hands = PlayerMap::from_vec(vec![Deck::new(), deck(5), Deck::new()]);
        assert_eq!(
            GameResult::decide(&hands, &Deck::new(), &Deck::new()),
            Some(GameResult::Winner(PlayerId(1)))
        );

        // Cards still on the pile keep the game open
        assert_eq!(GameResult::decide(&hands, &deck(2), &Deck::new()), None);
        assert_eq!(GameResult::decide(&hands, &Deck::new(), &deck(1)), None);

        let split = PlayerMap::from_vec(vec![deck(3), deck(2)]);
        assert_eq!(GameResult::decide(&split, &Deck::new(), &Deck::new()), None);
    }

    #[test]
    fn test_draw() {
        let empty = PlayerMap::from_vec(vec![Deck::new(), Deck::new()]);

        // 1-2-3 is a run, so someone can still slap
        assert_eq!(GameResult::decide(&empty, &deck(3), &Deck::new()), None);

        let dead: Deck = [2, 7].into_iter().map(|r| Card::new(Suit::Clubs, r).unwrap()).collect();
        assert_eq!(
            GameResult::decide(&empty, &dead, &deck(5)),
            Some(GameResult::Draw)
        );
    }
}
