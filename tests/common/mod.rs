//! Shared helpers for integration tests.

#![allow(dead_code)]

use rat_screw::{Card, Deck, Manager, PlayerId, PlayerMap, Suit, TableConfig};

/// A seeded two-player, one-deck table.
pub fn table(players: usize) -> Manager {
    Manager::new(TableConfig::new(players, 1).with_seed(42)).unwrap()
}

/// A table whose pile holds exactly `pile` (listed bottom to top).
///
/// The pile cards are taken out of the dealt hands and the rest of the deck
/// is re-dealt round robin, so the table still holds every card once.
pub fn table_with_pile(players: usize, pile: &[(u8, Suit)]) -> Manager {
    let mut snapshot = table(players).snapshot();

    let mut remaining: Vec<Card> = Vec::new();
    for hand in snapshot.hands.values() {
        remaining.extend(hand.iter().copied());
    }

    let mut rigged = Deck::new();
    for &(rank, suit) in pile {
        let wanted = Card::new(suit, rank).unwrap();
        let pos = remaining
            .iter()
            .position(|&c| c == wanted)
            .expect("card already used");
        rigged.put_bottom(remaining.remove(pos));
    }

    let rest: Deck = remaining.into_iter().collect();
    snapshot.hands = PlayerMap::from_vec(rest.deal_all(players));
    snapshot.pile = rigged;
    Manager::restore(snapshot).unwrap()
}

/// Move every card of `from` into `to`.
pub fn empty_hand(table: &Manager, from: PlayerId, to: PlayerId) -> Manager {
    let mut snapshot = table.snapshot();
    let mut moved = std::mem::take(&mut snapshot.hands[from]);
    snapshot.hands[to].absorb_all(&mut moved);
    Manager::restore(snapshot).unwrap()
}
