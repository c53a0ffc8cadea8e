//! Historical outcome accounting.
//!
//! Statistics are updated exactly once per completed game and persisted
//! under their own key, independent of the daily snapshot. Day rollover
//! never resets them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Highest mistake bucket tracked in the distribution.
pub const MAX_MISTAKES: u32 = 3;

/// Accumulated results across all days.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Completed games, won or lost.
    pub games_played: u32,
    /// Games finished with all five pairs.
    pub games_won: u32,
    /// Consecutive wins ending with the latest game.
    pub current_streak: u32,
    /// Longest win streak ever reached.
    pub max_streak: u32,
    /// Mistake count (attempts used minus one) to number of games.
    pub mistake_distribution: BTreeMap<u32, u32>,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::empty()
    }
}

/// Summary of one `record_outcome` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordedOutcome {
    /// Distribution bucket that was incremented.
    pub mistakes: u32,
    /// Whether the game counted as a win.
    pub won: bool,
}

impl Statistics {
    /// No games played; every mistake bucket present with a zero count.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            max_streak: 0,
            mistake_distribution: (0..=MAX_MISTAKES).map(|m| (m, 0)).collect(),
        }
    }

    /// Fold one completed game into the totals.
    ///
    /// `attempts_used = max_tries - tries_remaining` and
    /// `mistakes = attempts_used - 1`, clamped to `0..=MAX_MISTAKES`.
    /// A game is won iff all `PAIR_COUNT` pairs were correct.
    pub fn record_outcome(
        &mut self,
        tries_remaining: u8,
        max_tries: u8,
        correct_pair_count: usize,
    ) -> RecordedOutcome {
        let attempts_used = u32::from(max_tries.saturating_sub(tries_remaining));
        let mistakes = attempts_used.saturating_sub(1).min(MAX_MISTAKES);
        let won = correct_pair_count == crate::core::PAIR_COUNT;

        self.games_played += 1;
        *self.mistake_distribution.entry(mistakes).or_insert(0) += 1;

        if won {
            self.games_won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }

        RecordedOutcome { mistakes, won }
    }

    /// Share of games won, in percent. Zero before any game is played.
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.games_won) / f64::from(self.games_played) * 100.0
    }

    /// Games solved on the first attempt.
    #[must_use]
    pub fn perfect_games(&self) -> u32 {
        self.mistakes(0)
    }

    /// Count for one mistake bucket.
    #[must_use]
    pub fn mistakes(&self, bucket: u32) -> u32 {
        self.mistake_distribution.get(&bucket).copied().unwrap_or(0)
    }
}
