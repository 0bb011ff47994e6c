//! Ordered card sequences: hands, the pile and the burn pile.
//!
//! Index 0 is the front of the deck. Hands are drawn from the front and
//! receive cards at the back, so a card taken into a hand is played again
//! only after everything already held. The pile grows at the back, which
//! makes the back its face-up top card.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, Suit, ACE, KING};
use crate::core::GameRng;

/// An ordered, mutable sequence of cards.
///
/// Backed by `im::Vector`, so cloning is O(1) and draws from the front are
/// cheap. Duplicates are expected when several decks are in play.
///
/// ## Example
///
/// ```
/// use rat_screw::cards::{Card, Deck, Suit};
///
/// let mut deck = Deck::new();
/// deck.put_bottom(Card::new(Suit::Clubs, 5).unwrap());
/// deck.put_bottom(None::<Card>);
/// assert_eq!(deck.len(), 1);
/// assert!(deck.draw_top().is_some());
/// assert!(deck.draw_top().is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every (suit, rank) combination `deck_count` times, in generation
    /// order: suit by suit, rank by rank, copies adjacent.
    #[must_use]
    pub fn unshuffled(deck_count: usize) -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| (ACE..=KING).map(move |rank| Card { suit, rank }))
            .flat_map(|card| std::iter::repeat(card).take(deck_count))
            .collect();
        Self { cards }
    }

    /// A shuffled set of `deck_count` full decks.
    #[must_use]
    pub fn generate_full(deck_count: usize, rng: &mut GameRng) -> Self {
        let mut deck = Self::unshuffled(deck_count);
        deck.shuffle(rng);
        deck
    }

    /// Shuffle in place. `im::Vector` isn't a slice, so the cards take a
    /// round trip through a `Vec`.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Deal round-robin into `hands` decks without disturbing this one.
    ///
    /// Card `i` goes to hand `i % hands`, so when the count doesn't divide
    /// evenly the earlier hands hold one extra card.
    #[must_use]
    pub fn deal_all(&self, hands: usize) -> Vec<Deck> {
        let mut dealt = vec![Deck::new(); hands];
        if hands == 0 {
            return dealt;
        }
        for (i, card) in self.cards.iter().enumerate() {
            dealt[i % hands].cards.push_back(*card);
        }
        dealt
    }

    /// Remove and return the front card, or `None` if the deck is empty.
    #[must_use]
    pub fn draw_top(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Append a card to the back. Passing `None` does nothing.
    pub fn put_bottom(&mut self, card: impl Into<Option<Card>>) {
        if let Some(card) = card.into() {
            self.cards.push_back(card);
        }
    }

    /// Move every card of `other` onto the back of this deck, front first,
    /// leaving `other` empty.
    pub fn absorb_all(&mut self, other: &mut Deck) {
        self.cards.append(std::mem::take(&mut other.cards));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The next card [`draw_top`](Self::draw_top) would return. On a pile
    /// this is the oldest card.
    #[must_use]
    pub fn front(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    /// The most recently added card; the face-up card of a pile.
    #[must_use]
    pub fn back(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// The card `depth` places in from the back. `from_back(0)` is
    /// [`back`](Self::back).
    #[must_use]
    pub fn from_back(&self, depth: usize) -> Option<Card> {
        let index = self.cards.len().checked_sub(depth + 1)?;
        self.cards.get(index).copied()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
