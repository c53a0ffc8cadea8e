//! Value type bindings for Python.

use pyo3::prelude::*;

use crate::core::Word;
use crate::puzzle::{Submission, SubmissionOutcome};
use crate::stats::Statistics;

/// Python wrapper for a pool word.
#[pyclass(name = "Word")]
#[derive(Clone, Debug)]
pub struct PyWord(pub Word);

#[pymethods]
impl PyWord {
    /// Word ID, used for `place_word`.
    #[getter]
    fn id(&self) -> u32 {
        self.0.id.raw()
    }

    #[getter]
    fn text(&self) -> String {
        self.0.text().to_string()
    }

    /// Whether the word is on the board.
    #[getter]
    fn is_paired(&self) -> bool {
        self.0.is_paired()
    }

    fn __repr__(&self) -> String {
        format!(
            "Word(id={}, text={:?}, paired={})",
            self.0.id.raw(),
            self.0.text(),
            self.0.is_paired()
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for a scored submission.
#[pyclass(name = "Submission")]
#[derive(Clone, Debug)]
pub struct PySubmission(pub Submission);

#[pymethods]
impl PySubmission {
    /// Per-pair results; `None` for pairs that had an empty slot.
    #[getter]
    fn pair_results(&self) -> Vec<Option<bool>> {
        self.0.pair_results.to_vec()
    }

    #[getter]
    fn correct_count(&self) -> usize {
        self.0.correct_count
    }

    #[getter]
    fn tries_remaining(&self) -> u8 {
        self.0.tries_remaining
    }

    /// "continue", "won" or "lost".
    #[getter]
    fn outcome(&self) -> &'static str {
        match self.0.outcome {
            SubmissionOutcome::Continue => "continue",
            SubmissionOutcome::Won => "won",
            SubmissionOutcome::Lost => "lost",
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Submission(correct={}, tries_remaining={}, outcome={})",
            self.0.correct_count,
            self.0.tries_remaining,
            self.outcome()
        )
    }
}

/// Python wrapper for statistics.
#[pyclass(name = "Statistics")]
#[derive(Clone, Debug)]
pub struct PyStatistics(pub Statistics);

#[pymethods]
impl PyStatistics {
    #[getter]
    fn games_played(&self) -> u32 {
        self.0.games_played
    }

    #[getter]
    fn games_won(&self) -> u32 {
        self.0.games_won
    }

    #[getter]
    fn current_streak(&self) -> u32 {
        self.0.current_streak
    }

    #[getter]
    fn max_streak(&self) -> u32 {
        self.0.max_streak
    }

    #[getter]
    fn win_percentage(&self) -> f64 {
        self.0.win_percentage()
    }

    #[getter]
    fn perfect_games(&self) -> u32 {
        self.0.perfect_games()
    }

    /// Mistake distribution as (mistakes, games) pairs, ascending.
    fn mistake_distribution(&self) -> Vec<(u32, u32)> {
        self.0
            .mistake_distribution
            .iter()
            .map(|(&k, &v)| (k, v))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "Statistics(played={}, won={}, streak={}, max_streak={})",
            self.0.games_played, self.0.games_won, self.0.current_streak, self.0.max_streak
        )
    }
}
