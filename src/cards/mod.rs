//! Cards and decks.
//!
//! ## Key Types
//!
//! - `Card`: Immutable suit + rank value (rank 1-13)
//! - `Suit`: The four French suits
//! - `Deck`: Ordered card sequence used for hands, the pile and the burn pile

pub mod card;
pub mod deck;

pub use card::{Card, Suit, ACE, JACK, KING, QUEEN};
pub use deck::Deck;
