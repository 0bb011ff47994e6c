//! Table bindings for Python.

use pyo3::prelude::*;

use crate::core::{PlayerId, TableConfig};
use crate::rules::GameResult;
use crate::table::{Manager, Outcome};

use super::py_core::{table_error, PyCard};

fn outcome_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Normal => "NORMAL",
        Outcome::Penalty => "PENALTY",
        Outcome::PileTaken => "PILE_TAKEN",
    }
}

/// Python wrapper for Manager.
#[pyclass(name = "Manager")]
pub struct PyManager {
    inner: Manager,
}

#[pymethods]
impl PyManager {
    /// Seat a table and deal.
    ///
    /// # Arguments
    /// - player_count: Number of players (2-255)
    /// - deck_count: Standard decks shuffled together
    /// - seed: RNG seed; `None` deals from entropy
    #[new]
    #[pyo3(signature = (player_count = 2, deck_count = 1, seed = None))]
    fn new(player_count: usize, deck_count: usize, seed: Option<u64>) -> PyResult<Self> {
        let config = TableConfig {
            player_count,
            deck_count,
            seed,
        };
        Manager::new(config)
            .map(|inner| Self { inner })
            .map_err(table_error)
    }

    /// Deal a new game. Omitted or zero counts keep the current ones.
    #[pyo3(signature = (player_count = None, deck_count = None))]
    fn reset(&mut self, player_count: Option<usize>, deck_count: Option<usize>) -> PyResult<()> {
        self.inner
            .reset(player_count, deck_count)
            .map_err(table_error)
    }

    /// Returns "NORMAL" or "PENALTY".
    fn play_card(&mut self, player: u8) -> PyResult<&'static str> {
        self.inner
            .play_card(PlayerId(player))
            .map(outcome_name)
            .map_err(table_error)
    }

    /// Returns "PILE_TAKEN" or "PENALTY".
    fn slap_pile(&mut self, player: u8) -> PyResult<&'static str> {
        self.inner
            .slap_pile(PlayerId(player))
            .map(outcome_name)
            .map_err(table_error)
    }

    fn can_slap_pile(&self) -> bool {
        self.inner.can_slap_pile()
    }

    /// Name of the pattern a slap would claim, if any.
    fn slap_rule(&self) -> Option<&'static str> {
        self.inner.slap_rule().map(|rule| rule.name())
    }

    fn top_of_pile(&self) -> Option<PyCard> {
        self.inner.top_of_pile().map(PyCard)
    }

    #[getter]
    fn turn(&self) -> u8 {
        self.inner.turn().0
    }

    fn hand_sizes(&self) -> Vec<usize> {
        self.inner.hand_sizes().values().copied().collect()
    }

    #[getter]
    fn pile_size(&self) -> usize {
        self.inner.pile_size()
    }

    #[getter]
    fn burn_size(&self) -> usize {
        self.inner.burn_size()
    }

    /// Seat of the winner once the game is over.
    fn winner(&self) -> Option<u8> {
        match self.inner.result() {
            Some(GameResult::Winner(p)) => Some(p.0),
            _ => None,
        }
    }

    /// True once nobody can move and nobody has won.
    fn is_draw(&self) -> bool {
        self.inner.result() == Some(GameResult::Draw)
    }

    fn __repr__(&self) -> String {
        format!(
            "Manager(players={}, decks={}, turn={})",
            self.inner.player_count(),
            self.inner.deck_count(),
            self.inner.turn().0
        )
    }
}
