//! Playing cards: suit, rank and the pairwise tests slap rules are built on.

use serde::{Deserialize, Serialize};

use crate::core::CardError;

/// Lowest valid rank (Ace).
pub const ACE: u8 = 1;
/// Rank of the Jack.
pub const JACK: u8 = 11;
/// Rank of the Queen.
pub const QUEEN: u8 = 12;
/// Highest valid rank (King).
pub const KING: u8 = 13;

/// The four suits, in deck generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "CLUBS",
            Suit::Diamonds => "DIAMONDS",
            Suit::Hearts => "HEARTS",
            Suit::Spades => "SPADES",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable playing card.
///
/// The rank is always in `1..=13`: construction and deserialization both
/// reject anything else.
///
/// ```
/// use rat_screw::cards::{Card, Suit};
///
/// let queen = Card::new(Suit::Hearts, 12).unwrap();
/// assert_eq!(queen.rank_name(), "QUEEN");
/// assert_eq!(queen.to_string(), "QUEEN OF HEARTS");
/// assert!(Card::new(Suit::Hearts, 14).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    pub(super) suit: Suit,
    pub(super) rank: u8,
}

#[derive(Deserialize)]
struct RawCard {
    suit: Suit,
    rank: u8,
}

impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.suit, raw.rank)
    }
}

impl Card {
    /// Create a card, rejecting ranks outside `1..=13`.
    pub fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if !(ACE..=KING).contains(&rank) {
            return Err(CardError::InvalidRank { rank });
        }
        Ok(Self { suit, rank })
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Upper-case display name of the rank, e.g. `ACE`, `SIX`, `KING`.
    #[must_use]
    pub fn rank_name(self) -> &'static str {
        match self.rank {
            1 => "ACE",
            2 => "TWO",
            3 => "THREE",
            4 => "FOUR",
            5 => "FIVE",
            6 => "SIX",
            7 => "SEVEN",
            8 => "EIGHT",
            9 => "NINE",
            10 => "TEN",
            11 => "JACK",
            12 => "QUEEN",
            13 => "KING",
            rank => unreachable!("card rank {rank} escaped the constructor guard"),
        }
    }

    /// Aces and face cards.
    #[must_use]
    pub fn is_challenge_card(self) -> bool {
        self.rank == ACE || self.rank > 10
    }

    /// Attempts the next player gets to answer this card.
    ///
    /// Ace gives 4, Jack 1, Queen 2, King 3. `None` means no limit (not a
    /// challenge card).
    #[must_use]
    pub fn challenge_attempts_allowed(self) -> Option<u8> {
        match self.rank {
            ACE => Some(4),
            r if r > 10 => Some(r - 10),
            _ => None,
        }
    }

    /// Rank equality, ignoring suit.
    #[must_use]
    pub fn same_rank_as(self, other: Card) -> bool {
        self.rank == other.rank
    }

    /// True if the two ranks are exactly `{rank_a, rank_b}`, in either order.
    #[must_use]
    pub fn forms_pair(self, other: Card, rank_a: u8, rank_b: u8) -> bool {
        (self.rank == rank_a && other.rank == rank_b)
            || (self.rank == rank_b && other.rank == rank_a)
    }

    #[must_use]
    pub fn forms_six_nine(self, other: Card) -> bool {
        self.forms_pair(other, 6, 9)
    }

    #[must_use]
    pub fn forms_king_queen(self, other: Card) -> bool {
        self.forms_pair(other, QUEEN, KING)
    }

    /// True if `self`, `middle`, `edge` count up or down by one, like
    /// 7-8-9 or Q-J-10. No wrapping around the King.
    #[must_use]
    pub fn forms_run(self, middle: Card, edge: Card) -> bool {
        let (a, b, c) = (i16::from(self.rank), i16::from(middle.rank), i16::from(edge.rank));
        (a + 1 == b && b + 1 == c) || (a - 1 == b && b - 1 == c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} OF {}", self.rank_name(), self.suit)
    }
}
