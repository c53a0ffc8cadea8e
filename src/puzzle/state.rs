//! Puzzle state records.
//!
//! ## AttemptState
//!
//! Tries, the locked correct pairs, and interim feedback from the latest
//! submission.
//!
//! ## CompletionState
//!
//! Terminal flag, results message and answer reveal.
//!
//! ## PuzzleView
//!
//! Everything a UI reads, bundled in one cheaply clonable value.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PairIndex, SlotArray, Word, PAIR_COUNT};
use crate::stats::Statistics;

/// Per-pair results of one submission. `None` marks a pair that had an
/// empty slot and was skipped.
pub type PairResults = SmallVec<[Option<bool>; PAIR_COUNT]>;

/// Attempt tracking for the current day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptState {
    /// Submissions left. Only decreases, one per submission.
    pub tries_remaining: u8,

    /// Interim feedback is visible.
    pub has_submitted: bool,

    /// Results of the latest submission. Meaningful only while
    /// `has_submitted` is true.
    pub pair_results: PairResults,

    /// Pairs confirmed correct. Never shrinks within a day.
    pub correct_pairs: OrdSet<PairIndex>,
}

impl AttemptState {
    /// Fresh attempt state with `max_tries` submissions.
    #[must_use]
    pub fn new(max_tries: u8) -> Self {
        Self {
            tries_remaining: max_tries,
            has_submitted: false,
            pair_results: SmallVec::new(),
            correct_pairs: OrdSet::new(),
        }
    }

    /// Whether a pair is locked correct.
    #[must_use]
    pub fn is_locked(&self, pair: PairIndex) -> bool {
        self.correct_pairs.contains(&pair)
    }
}

/// End-of-game state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionState {
    /// Terminal for the day.
    pub game_completed: bool,
    /// Human-readable summary of the latest submission.
    pub results_message: String,
    /// Correct answers are on display (loss only).
    pub showing_correct_answers: bool,
}

/// How the engine started for the current day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartMode {
    /// Today's game was already finished; its snapshot was restored.
    CompletedToday,
    /// Today's puzzle was started earlier but not finished; the pool is
    /// rebuilt in definition order without shuffling.
    ResumedToday,
    /// First open of the day; the pool was shuffled.
    FreshDay,
}

/// What a submission ended in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    /// Tries remain and some pairs are wrong.
    Continue,
    /// All pairs correct.
    Won,
    /// Out of tries.
    Lost,
}

/// Result of `Puzzle::submit`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub pair_results: PairResults,
    pub correct_count: usize,
    pub tries_remaining: u8,
    pub outcome: SubmissionOutcome,
}

impl Submission {
    /// Whether this submission ended the game.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.outcome != SubmissionOutcome::Continue
    }
}

/// Read-only snapshot of everything a UI displays.
///
/// Collections are `im` persistent structures, so cloning a view is O(1)
/// no matter how often it is taken.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PuzzleView {
    pub words: Vector<Word>,
    pub slots: SlotArray,
    pub tries_remaining: u8,
    pub has_submitted: bool,
    pub pair_results: PairResults,
    pub correct_pairs: OrdSet<PairIndex>,
    pub game_completed: bool,
    pub results_message: String,
    pub showing_correct_answers: bool,
    pub statistics: Statistics,
}
