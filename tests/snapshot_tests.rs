//! Saving and resuming a table.

mod common;

use common::table;
use rat_screw::{ConfigError, Manager, PlayerId, TableError, TableSnapshot};

fn played(players: usize, plays: usize) -> Manager {
    let mut table = table(players);
    for _ in 0..plays {
        let turn = table.turn();
        table.play_card(turn).unwrap();
    }
    table
}

#[test]
fn test_resume_from_bytes() {
    let table = played(3, 7);
    let bytes = table.snapshot().to_bytes().unwrap();

    let resumed = Manager::restore(TableSnapshot::from_bytes(&bytes).unwrap()).unwrap();
    assert_eq!(resumed.snapshot(), table.snapshot());
    assert_eq!(resumed.turn(), PlayerId(1));
    assert_eq!(resumed.pile_size(), 7);
    assert!(resumed.history().is_empty());
}

#[test]
fn test_resumed_table_reshuffles_identically() {
    let mut original = played(2, 3);
    let mut resumed = Manager::restore(original.snapshot()).unwrap();

    original.reset(None, None).unwrap();
    resumed.reset(None, None).unwrap();
    assert_eq!(original.snapshot(), resumed.snapshot());
}

#[test]
fn test_missing_card_is_rejected() {
    let table = played(2, 1);
    let mut snapshot = table.snapshot();
    let _ = snapshot.pile.draw_top();

    let err = Manager::restore(snapshot).unwrap_err();
    assert!(matches!(err, TableError::CorruptSnapshot(_)));
}

#[test]
fn test_oversized_deck_count_is_rejected() {
    let mut snapshot = table(2).snapshot();
    snapshot.config.deck_count = usize::MAX;
    let bytes = snapshot.to_bytes().unwrap();

    let decoded = TableSnapshot::from_bytes(&bytes).unwrap();
    let err = Manager::restore(decoded).unwrap_err();
    assert!(matches!(
        err,
        TableError::InvalidConfig(ConfigError::TooManyDecks(usize::MAX))
    ));
}

#[test]
fn test_garbage_bytes_are_rejected() {
    let err = TableSnapshot::from_bytes(&[0xff, 0x01]).unwrap_err();
    assert!(matches!(err, TableError::Encoding(_)));
}
