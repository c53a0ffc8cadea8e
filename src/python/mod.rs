//! Python bindings for the MashUp puzzle engine.
//!
//! # Quick Start
//!
//! ```python
//! import mashup
//!
//! puzzle = mashup.Puzzle(store_dir="~/.mashup", seed=None)
//!
//! for word in puzzle.words():
//!     puzzle.place_word(word.id, puzzle.find_next_available_slot())
//!
//! result = puzzle.submit()
//! print(puzzle.results_message)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_puzzle;

pub use py_core::*;
pub use py_puzzle::*;

/// mashup: a daily word-pairing puzzle engine.
#[pymodule]
fn mashup(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyWord>()?;
    m.add_class::<PySubmission>()?;
    m.add_class::<PyStatistics>()?;
    m.add_class::<PyPuzzle>()?;

    Ok(())
}
