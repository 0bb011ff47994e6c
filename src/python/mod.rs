//! Python bindings for the rat-screw engine.
//!
//! # Quick Start
//!
//! ```python
//! import rat_screw as ers
//!
//! table = ers.Manager(player_count=2, deck_count=1, seed=42)
//! table.play_card(0)        # "NORMAL"
//! table.slap_pile(1)        # "PENALTY" unless the pile shows a pattern
//! print(table.top_of_pile(), table.hand_sizes())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_table;

pub use py_core::*;
pub use py_table::*;

/// rat_screw: Egyptian Rat Screw rules engine.
#[pymodule]
fn rat_screw(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyManager>()?;
    Ok(())
}
