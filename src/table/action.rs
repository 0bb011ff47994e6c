//! Player actions, their outcomes, and the record kept of each.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::rules::SlapRule;

/// One discrete player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Play the top card of the hand onto the pile.
    Play(PlayerId),
    /// Slap the pile.
    Slap(PlayerId),
}

impl PlayerAction {
    /// The player taking the action.
    #[must_use]
    pub fn player(self) -> PlayerId {
        match self {
            PlayerAction::Play(p) | PlayerAction::Slap(p) => p,
        }
    }
}

impl std::fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerAction::Play(p) => write!(f, "{p} plays"),
            PlayerAction::Slap(p) => write!(f, "{p} slaps"),
        }
    }
}

/// What an action did to the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A legal play: the card went onto the pile and the turn moved on.
    Normal,
    /// An illegal action: the actor burned a card (if they had one). The
    /// turn only moves if its holder just burned their last card.
    Penalty,
    /// A successful slap: the slapper took the pile and burn pile and now
    /// holds the turn.
    PileTaken,
}

/// A recorded action with its result, for replay and display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Position in the session, starting at 0 after each reset.
    pub sequence: usize,

    pub action: PlayerAction,

    pub outcome: Outcome,

    /// The card played or burned, if one moved.
    pub card: Option<Card>,

    /// The pattern that paid out a successful slap.
    pub rule: Option<SlapRule>,
}
