//! Puzzle bindings for Python.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::core::clock::format_countdown;
use crate::core::{PuzzleConfig, SystemClock, WordId};
use crate::persistence::{FileStore, KeyValueStore, MemoryStore};
use crate::puzzle::Puzzle;

use super::py_core::{PyStatistics, PySubmission, PyWord};

type DynStore = Box<dyn KeyValueStore>;

/// Python wrapper for the daily puzzle.
///
/// Persists to `store_dir` when given, otherwise keeps everything in memory.
#[pyclass(name = "Puzzle", unsendable)]
pub struct PyPuzzle {
    inner: Puzzle<DynStore, SystemClock>,
}

#[pymethods]
impl PyPuzzle {
    /// Open today's puzzle.
    ///
    /// # Arguments
    /// - store_dir: Directory for persisted state (None = in memory)
    /// - seed: Shuffle seed (None = random)
    /// - max_tries: Submissions allowed per day
    #[new]
    #[pyo3(signature = (store_dir = None, seed = None, max_tries = 3))]
    fn new(store_dir: Option<String>, seed: Option<u64>, max_tries: u8) -> PyResult<Self> {
        let store: DynStore = match store_dir {
            Some(dir) => Box::new(
                FileStore::open(dir).map_err(|e| PyIOError::new_err(e.to_string()))?,
            ),
            None => Box::new(MemoryStore::new()),
        };

        let mut config = PuzzleConfig::default().with_max_tries(max_tries);
        config.seed = seed;

        let inner = Puzzle::new(config, store, SystemClock)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Place a word (by ID) into a slot. Returns False if ignored.
    fn place_word(&mut self, word_id: u32, slot: usize) -> bool {
        self.inner.place_word(WordId::new(word_id), slot)
    }

    /// Return a slot's word to the pool. Returns False if ignored.
    fn remove_word(&mut self, slot: usize) -> bool {
        self.inner.remove_word(slot)
    }

    /// Swap two slots. Returns False if ignored.
    fn swap_words(&mut self, from_slot: usize, to_slot: usize) -> bool {
        self.inner.swap_words(from_slot, to_slot)
    }

    /// Lowest empty slot, or None when full.
    fn find_next_available_slot(&self) -> Option<usize> {
        self.inner.find_next_available_slot()
    }

    /// Score the board. None once the game is over.
    fn submit(&mut self) -> Option<PySubmission> {
        self.inner.submit().map(PySubmission)
    }

    /// Fire due timers. Returns how many fired.
    fn advance_timers(&mut self) -> usize {
        self.inner.advance_timers()
    }

    /// The word pool in display order.
    fn words(&self) -> Vec<PyWord> {
        self.inner.words().iter().cloned().map(PyWord).collect()
    }

    /// Word IDs per slot (None for empty slots).
    fn slots(&self) -> Vec<Option<u32>> {
        self.inner.slots().iter().map(|s| s.map(WordId::raw)).collect()
    }

    /// Locked correct pair indices, ascending.
    fn correct_pairs(&self) -> Vec<usize> {
        self.inner.correct_pairs().iter().map(|p| p.index()).collect()
    }

    /// The target pairs as (first, second).
    fn correct_answers(&self) -> Vec<(String, String)> {
        self.inner
            .correct_answers()
            .iter()
            .map(|p| (p.first.clone(), p.second.clone()))
            .collect()
    }

    #[getter]
    fn tries_remaining(&self) -> u8 {
        self.inner.tries_remaining()
    }

    #[getter]
    fn has_submitted(&self) -> bool {
        self.inner.has_submitted()
    }

    #[getter]
    fn game_completed(&self) -> bool {
        self.inner.game_completed()
    }

    #[getter]
    fn results_message(&self) -> String {
        self.inner.results_message().to_string()
    }

    #[getter]
    fn showing_correct_answers(&self) -> bool {
        self.inner.showing_correct_answers()
    }

    #[getter]
    fn statistics(&self) -> PyStatistics {
        PyStatistics(self.inner.statistics().clone())
    }

    /// Share text for the current result.
    fn share_text(&self) -> String {
        self.inner.share_text()
    }

    /// Countdown to the next puzzle as HH:MM.
    fn time_until_next_puzzle(&self) -> String {
        format_countdown(self.inner.time_until_next_puzzle())
    }

    fn __repr__(&self) -> String {
        format!(
            "Puzzle(tries_remaining={}, correct={}, completed={})",
            self.inner.tries_remaining(),
            self.inner.correct_pairs().len(),
            self.inner.game_completed()
        )
    }
}
