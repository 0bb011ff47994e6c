//! The table manager: one game session.
//!
//! The manager owns every card in play: one hand per player, the face-up
//! pile and the burn pile. Players act through [`Manager::play_card`] and
//! [`Manager::slap_pile`]; each call runs to completion and reports an
//! [`Outcome`].
//!
//! ## Invariants
//!
//! - Cards are conserved: pile + burn + hands is always `52 × deck_count`.
//! - `turn` names a player holding at least one card, unless every hand is
//!   empty.

use im::Vector;
use tracing::{debug, error, info};

use super::action::{ActionRecord, Outcome, PlayerAction};
use super::snapshot::TableSnapshot;
use crate::cards::{Card, Deck};
use crate::core::{GameRng, PlayerId, PlayerMap, TableConfig, TableError};
use crate::rules::{matching_rule, GameResult, SlapRule};

/// One Egyptian Rat Screw session.
///
/// ## Example
///
/// ```
/// use rat_screw::core::{PlayerId, TableConfig};
/// use rat_screw::table::{Manager, Outcome};
///
/// let mut table = Manager::new(TableConfig::default().with_seed(42)).unwrap();
/// assert_eq!(table.turn(), PlayerId(0));
///
/// // Player 1 jumps the gun and burns a card
/// assert_eq!(table.play_card(PlayerId(1)).unwrap(), Outcome::Penalty);
/// assert_eq!(table.burn_size(), 1);
///
/// assert_eq!(table.play_card(PlayerId(0)).unwrap(), Outcome::Normal);
/// assert_eq!(table.turn(), PlayerId(1));
/// assert!(table.top_of_pile().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct Manager {
    config: TableConfig,
    turn: PlayerId,
    pile: Deck,
    burn: Deck,
    hands: PlayerMap<Deck>,
    rng: GameRng,
    history: Vector<ActionRecord>,
}

impl Manager {
    /// Seat a table and deal the first game.
    pub fn new(config: TableConfig) -> Result<Self, TableError> {
        config.validate()?;

        let mut rng = GameRng::from_seed_option(config.seed);
        let hands = deal_hands(&config, &mut rng);
        Ok(Self {
            config,
            turn: PlayerId(0),
            pile: Deck::new(),
            burn: Deck::new(),
            hands,
            rng,
            history: Vector::new(),
        })
    }

    /// Shorthand for an unseeded table.
    pub fn with_players(player_count: usize, deck_count: usize) -> Result<Self, TableError> {
        Self::new(TableConfig::new(player_count, deck_count))
    }

    /// Start a new game.
    ///
    /// `None` or zero keeps the current player or deck count. The new
    /// configuration is validated before anything is rebuilt. The shuffle
    /// continues the table's random stream, so a seeded table replays the
    /// same sequence of deals.
    pub fn reset(
        &mut self,
        player_count: Option<usize>,
        deck_count: Option<usize>,
    ) -> Result<(), TableError> {
        let config = self.config.overridden(player_count, deck_count);
        config.validate()?;

        self.config = config;
        self.deal();

        info!(
            players = config.player_count,
            decks = config.deck_count,
            "table reset"
        );
        Ok(())
    }

    fn deal(&mut self) {
        self.hands = deal_hands(&self.config, &mut self.rng);
        self.pile = Deck::new();
        self.burn = Deck::new();
        self.turn = PlayerId(0);
        self.history = Vector::new();
    }

    /// Apply one player input.
    pub fn apply(&mut self, action: PlayerAction) -> Result<Outcome, TableError> {
        match action {
            PlayerAction::Play(player) => self.play_card(player),
            PlayerAction::Slap(player) => self.slap_pile(player),
        }
    }

    /// Play the top card of `player`'s hand.
    ///
    /// Out of turn, the card goes to the burn pile instead and the result is
    /// [`Outcome::Penalty`]; a player with an empty hand burns nothing.
    ///
    /// When every hand is empty there is nothing to play and the turn
    /// player's attempt is a no-op penalty.
    ///
    /// # Errors
    ///
    /// [`TableError::InternalInconsistency`] if it is `player`'s turn and
    /// their hand is empty while another player still holds cards.
    pub fn play_card(&mut self, player: PlayerId) -> Result<Outcome, TableError> {
        self.check_seat(player)?;

        if player != self.turn {
            let burned = self.hands[player].draw_top();
            self.burn.put_bottom(burned);
            debug!(%player, turn = %self.turn, card = ?burned, "played out of turn");
            return Ok(self.record(PlayerAction::Play(player), Outcome::Penalty, burned, None));
        }

        let Some(card) = self.hands[player].draw_top() else {
            if self.hands.values().all(Deck::is_empty) {
                debug!(%player, "no cards left in any hand");
                return Ok(self.record(PlayerAction::Play(player), Outcome::Penalty, None, None));
            }
            error!(%player, "turn points at an empty hand");
            return Err(TableError::InternalInconsistency { player });
        };

        self.pile.put_bottom(card);
        self.advance_turn();
        debug!(%player, %card, next = %self.turn, "card played");
        Ok(self.record(PlayerAction::Play(player), Outcome::Normal, Some(card), None))
    }

    /// Slap the pile.
    ///
    /// If the pile shows a slap pattern, `player` takes the pile and then the
    /// burn pile onto the bottom of their hand and the turn passes to them.
    /// Otherwise they burn a card.
    pub fn slap_pile(&mut self, player: PlayerId) -> Result<Outcome, TableError> {
        self.check_seat(player)?;

        let Some(rule) = matching_rule(&self.pile) else {
            let burned = self.hands[player].draw_top();
            self.burn.put_bottom(burned);
            if self.hands[self.turn].is_empty() {
                self.advance_turn();
            }
            debug!(%player, card = ?burned, "bad slap");
            return Ok(self.record(PlayerAction::Slap(player), Outcome::Penalty, burned, None));
        };

        let taken = self.pile.len() + self.burn.len();
        let hand = &mut self.hands[player];
        hand.absorb_all(&mut self.pile);
        hand.absorb_all(&mut self.burn);
        self.turn = player;

        info!(%player, %rule, cards = taken, "pile taken");
        if let Some(GameResult::Winner(winner)) = self.result() {
            info!(%winner, "game over");
        }
        Ok(self.record(PlayerAction::Slap(player), Outcome::PileTaken, None, Some(rule)))
    }

    /// Pass the turn to the next player around the table who holds cards.
    ///
    /// Leaves the turn alone when every hand is empty.
    fn advance_turn(&mut self) {
        let count = self.config.player_count;
        let from = self.turn;
        let next = (1..=count)
            .map(|step| from.after(step, count))
            .find(|&p| !self.hands[p].is_empty());
        if let Some(next) = next {
            self.turn = next;
        }
    }

    fn check_seat(&self, player: PlayerId) -> Result<(), TableError> {
        if player.index() < self.config.player_count {
            Ok(())
        } else {
            Err(TableError::UnknownPlayer {
                player,
                player_count: self.config.player_count,
            })
        }
    }

    fn record(
        &mut self,
        action: PlayerAction,
        outcome: Outcome,
        card: Option<Card>,
        rule: Option<SlapRule>,
    ) -> Outcome {
        self.history.push_back(ActionRecord {
            sequence: self.history.len(),
            action,
            outcome,
            card,
            rule,
        });
        outcome
    }

    // === Read-only state ===

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count
    }

    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.config.deck_count
    }

    /// Whose turn it is to play.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// Cards in a player's hand, `None` for an unknown seat.
    #[must_use]
    pub fn hand_size(&self, player: PlayerId) -> Option<usize> {
        self.hands.get(player).map(Deck::len)
    }

    #[must_use]
    pub fn hand_sizes(&self) -> PlayerMap<usize> {
        self.hands.map(Deck::len)
    }

    /// The face-up pile, oldest card first.
    #[must_use]
    pub fn pile(&self) -> &Deck {
        &self.pile
    }

    #[must_use]
    pub fn pile_size(&self) -> usize {
        self.pile.len()
    }

    /// Burned cards are face down; only the count is public.
    #[must_use]
    pub fn burn_size(&self) -> usize {
        self.burn.len()
    }

    /// The most recently played card, `None` if the pile is empty.
    #[must_use]
    pub fn top_of_pile(&self) -> Option<Card> {
        self.pile.back()
    }

    #[must_use]
    pub fn can_slap_pile(&self) -> bool {
        self.slap_rule().is_some()
    }

    /// The pattern a slap would claim right now.
    #[must_use]
    pub fn slap_rule(&self) -> Option<SlapRule> {
        matching_rule(&self.pile)
    }

    /// Cards across pile, burn pile and every hand.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.pile.len() + self.burn.len() + self.hands.values().map(Deck::len).sum::<usize>()
    }

    /// `Some` once a single player holds every card.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        GameResult::decide(&self.hands, &self.pile, &self.burn)
    }

    /// Every action since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn last_action(&self) -> Option<&ActionRecord> {
        self.history.back()
    }

    // === Snapshots ===

    /// Capture the table, including the RNG position.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            config: self.config,
            turn: self.turn,
            pile: self.pile.clone(),
            burn: self.burn.clone(),
            hands: self.hands.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild a table from a snapshot. History starts empty.
    ///
    /// # Errors
    ///
    /// [`TableError::CorruptSnapshot`] if the snapshot breaks a table
    /// invariant, or [`TableError::InvalidConfig`] for a bad configuration.
    pub fn restore(snapshot: TableSnapshot) -> Result<Self, TableError> {
        snapshot.validate()?;

        Ok(Self {
            config: snapshot.config,
            turn: snapshot.turn,
            pile: snapshot.pile,
            burn: snapshot.burn,
            hands: snapshot.hands,
            rng: GameRng::from_state(&snapshot.rng),
            history: Vector::new(),
        })
    }
}

/// Shuffle a fresh set of decks and deal it round robin.
fn deal_hands(config: &TableConfig, rng: &mut GameRng) -> PlayerMap<Deck> {
    let all = Deck::generate_full(config.deck_count, rng);
    PlayerMap::from_vec(all.deal_all(config.player_count))
}
