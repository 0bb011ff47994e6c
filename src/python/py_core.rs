//! Core type bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::cards::{Card, Suit};
use crate::core::{CardError, TableError};

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Create a card. `suit` is one of "clubs", "diamonds", "hearts", "spades".
    #[new]
    fn new(suit: &str, rank: u8) -> PyResult<Self> {
        let suit = match suit.to_ascii_lowercase().as_str() {
            "clubs" => Suit::Clubs,
            "diamonds" => Suit::Diamonds,
            "hearts" => Suit::Hearts,
            "spades" => Suit::Spades,
            other => return Err(PyValueError::new_err(format!("unknown suit '{other}'"))),
        };
        Card::new(suit, rank).map(Self).map_err(card_error)
    }

    #[getter]
    fn rank(&self) -> u8 {
        self.0.rank()
    }

    #[getter]
    fn suit(&self) -> &'static str {
        self.0.suit().name()
    }

    fn rank_name(&self) -> &'static str {
        self.0.rank_name()
    }

    fn is_challenge_card(&self) -> bool {
        self.0.is_challenge_card()
    }

    fn __repr__(&self) -> String {
        format!("Card({})", self.0)
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) fn card_error(err: CardError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Bad arguments become `ValueError`; broken invariants `RuntimeError`.
pub(crate) fn table_error(err: TableError) -> PyErr {
    match err {
        TableError::UnknownPlayer { .. }
        | TableError::InvalidConfig(_)
        | TableError::CorruptSnapshot(_)
        | TableError::Encoding(_) => PyValueError::new_err(err.to_string()),
        TableError::InternalInconsistency { .. } => PyRuntimeError::new_err(err.to_string()),
    }
}
