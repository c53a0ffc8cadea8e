//! Puzzle events.
//!
//! Events describe accepted state transitions. Rejected operations (out of
//! range, locked pair, duplicate word) emit nothing.

use serde::{Deserialize, Serialize};

use crate::core::WordId;

/// Something that changed in the puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleEvent {
    /// A word entered a slot, possibly evicting the previous occupant.
    WordPlaced {
        word: WordId,
        slot: usize,
        evicted: Option<WordId>,
    },

    /// A word left a slot and returned to the pool.
    WordRemoved { word: WordId, slot: usize },

    /// Two slots exchanged occupants.
    WordsSwapped { from: usize, to: usize },

    /// A submission was scored.
    Submitted {
        correct_count: usize,
        tries_remaining: u8,
    },

    /// Interim submission feedback was hidden and editing re-enabled.
    FeedbackCleared,

    /// The day's game ended.
    GameCompleted { won: bool },

    /// The full answer list became visible after a loss.
    AnswersRevealed,

    /// Statistics were updated for a completed game.
    StatisticsUpdated { games_played: u32, current_streak: u32 },
}

impl PuzzleEvent {
    /// Whether the event changed the board (slot occupancy).
    #[must_use]
    pub fn is_board_change(&self) -> bool {
        matches!(
            self,
            PuzzleEvent::WordPlaced { .. }
                | PuzzleEvent::WordRemoved { .. }
                | PuzzleEvent::WordsSwapped { .. }
        )
    }
}
