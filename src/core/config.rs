//! Puzzle configuration.
//!
//! A puzzle is defined by five ordered word pairs plus a few tuning knobs:
//! - `PairDefinition`: one compound word split into (first, second)
//! - `PairMatching`: whether a pair must sit in its own row to count
//! - `PuzzleConfig`: everything the engine needs at startup
//!
//! Configs can be built in code with the `with_*` methods or parsed from
//! JSON with `PuzzleConfig::from_json`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::slots::{PairIndex, PAIR_COUNT};
use super::word::{Word, WordId};

/// Longest accepted timer delay: one day, in milliseconds.
pub const MAX_DELAY_MS: u64 = 86_400_000;

/// Errors from building or parsing a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A pair has an empty (or whitespace-only) word.
    #[error("pair {pair} has an empty word")]
    EmptyWord { pair: usize },

    /// The same text appears twice across the pairs.
    #[error("word {0:?} appears more than once")]
    DuplicateWord(String),

    /// `max_tries` must allow at least one submission.
    #[error("max_tries must be at least 1, got {0}")]
    InvalidTries(u8),

    /// A timer delay is longer than `MAX_DELAY_MS`.
    #[error("{name} must be at most {max} ms, got {value}", max = MAX_DELAY_MS)]
    InvalidDelay { name: &'static str, value: u64 },

    /// The JSON document could not be parsed.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One target pair, order-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairDefinition {
    /// Word that belongs in the pair's even slot.
    pub first: String,
    /// Word that belongs in the pair's odd slot.
    pub second: String,
}

impl PairDefinition {
    /// Create a pair definition.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Whether (first, second) spells this pair. Reversed order never matches.
    #[must_use]
    pub fn matches(&self, first: &str, second: &str) -> bool {
        self.first == first && self.second == second
    }

    /// The joined compound word ("Second" + "Hand" = "SecondHand").
    #[must_use]
    pub fn combined(&self) -> String {
        format!("{}{}", self.first, self.second)
    }
}

/// How a filled pair is checked against the definitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairMatching {
    /// Pair `i` must spell definition `i`.
    #[default]
    Positional,
    /// Pair `i` may spell any definition, in its own order.
    AnyRow,
}

/// Complete puzzle configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// The five target pairs, in board order.
    pub pairs: [PairDefinition; PAIR_COUNT],

    /// Row matching rule for submissions.
    pub matching: PairMatching,

    /// Submissions allowed per day (default: 3).
    pub max_tries: u8,

    /// Delay before interim feedback clears, in milliseconds.
    pub feedback_delay_ms: u64,

    /// Delay before the answer list is revealed after a loss, in milliseconds.
    pub reveal_delay_ms: u64,

    /// Shuffle seed. `None` draws a fresh seed from entropy.
    pub seed: Option<u64>,

    /// Game name used in share text.
    pub title: String,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            pairs: [
                PairDefinition::new("Second", "Hand"),
                PairDefinition::new("Rock", "Star"),
                PairDefinition::new("Cold", "Feet"),
                PairDefinition::new("Broken", "Heart"),
                PairDefinition::new("Silver", "Lining"),
            ],
            matching: PairMatching::Positional,
            max_tries: 3,
            feedback_delay_ms: 2_000,
            reveal_delay_ms: 2_000,
            seed: None,
            title: "MashUp".to_string(),
        }
    }
}

impl PuzzleConfig {
    /// Create the default puzzle configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration. Missing fields use defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the target pairs.
    #[must_use]
    pub fn with_pairs(mut self, pairs: [PairDefinition; PAIR_COUNT]) -> Self {
        self.pairs = pairs;
        self
    }

    /// Set the row matching rule.
    #[must_use]
    pub fn with_matching(mut self, matching: PairMatching) -> Self {
        self.matching = matching;
        self
    }

    /// Set the number of submissions allowed.
    #[must_use]
    pub fn with_max_tries(mut self, tries: u8) -> Self {
        self.max_tries = tries;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set both timer delays, in milliseconds.
    #[must_use]
    pub fn with_delays(mut self, feedback_ms: u64, reveal_ms: u64) -> Self {
        self.feedback_delay_ms = feedback_ms;
        self.reveal_delay_ms = reveal_ms;
        self
    }

    /// Set the share-text title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Check the configuration for unusable values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tries == 0 {
            return Err(ConfigError::InvalidTries(self.max_tries));
        }
        for (name, value) in [
            ("feedback_delay_ms", self.feedback_delay_ms),
            ("reveal_delay_ms", self.reveal_delay_ms),
        ] {
            if value > MAX_DELAY_MS {
                return Err(ConfigError::InvalidDelay { name, value });
            }
        }

        let mut seen = FxHashSet::default();
        for (i, pair) in self.pairs.iter().enumerate() {
            for text in [&pair.first, &pair.second] {
                if text.trim().is_empty() {
                    return Err(ConfigError::EmptyWord { pair: i });
                }
                if !seen.insert(text.as_str()) {
                    return Err(ConfigError::DuplicateWord(text.clone()));
                }
            }
        }
        Ok(())
    }

    /// Definition for a pair index.
    #[must_use]
    pub fn pair(&self, pair: PairIndex) -> &PairDefinition {
        &self.pairs[pair.index()]
    }

    /// Whether (first, second) placed in `pair` counts as correct.
    #[must_use]
    pub fn is_correct(&self, pair: PairIndex, first: &str, second: &str) -> bool {
        match self.matching {
            PairMatching::Positional => self.pair(pair).matches(first, second),
            PairMatching::AnyRow => self.pairs.iter().any(|p| p.matches(first, second)),
        }
    }

    /// The ten words in definition order, ids 0-9, unshuffled.
    #[must_use]
    pub fn pool_words(&self) -> Vec<Word> {
        self.pairs
            .iter()
            .flat_map(|p| [p.first.as_str(), p.second.as_str()])
            .enumerate()
            .map(|(i, text)| Word::new(WordId::new(i as u32), text))
            .collect()
    }
}
