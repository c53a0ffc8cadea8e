//! # mashup
//!
//! Engine for a daily word-pairing puzzle: the player drags ten words into
//! ten ordered slots to rebuild five compound words, with a fixed number of
//! submissions per day.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: The engine is a synchronous state machine. Time
//!    comes from an injected `Clock`, shuffles from a seedable `GameRng`,
//!    and delayed transitions from a cancellable `TimerQueue`.
//!
//! 2. **Quiet Failure**: Invalid board operations are ignored and reported
//!    as `false`. Persistence failures are logged and swallowed; prior
//!    persisted state stays intact.
//!
//! 3. **Ratchet**: A pair confirmed correct stays correct and locked for
//!    the rest of the day.
//!
//! ## Quick Start
//!
//! ```
//! use mashup::{MemoryStore, Puzzle, PuzzleConfig, SystemClock};
//!
//! let mut puzzle = Puzzle::new(PuzzleConfig::default(), MemoryStore::new(), SystemClock).unwrap();
//!
//! let ids: Vec<_> = puzzle.config().pool_words().iter().map(|w| w.id).collect();
//! for (slot, id) in ids.into_iter().enumerate() {
//!     puzzle.place_word(id, slot);
//! }
//!
//! let submission = puzzle.submit().unwrap();
//! assert_eq!(submission.correct_count, 5);
//! assert!(puzzle.results_message().contains("Congratulations"));
//! ```
//!
//! ## Modules
//!
//! - `core`: Words, slots, configuration, RNG, clock
//! - `puzzle`: The engine, its state records, timers and messages
//! - `stats`: Historical statistics
//! - `persistence`: Key-value stores, daily gate, saved schema
//! - `events`: Observer notifications for UI layers

pub mod core;
pub mod puzzle;
pub mod stats;
pub mod persistence;
pub mod events;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Clock, ManualClock, SystemClock,
    ConfigError, PairDefinition, PairMatching, PuzzleConfig,
    GameRng,
    PairIndex, SlotArray, Word, WordId, PAIR_COUNT, SLOT_COUNT,
};

pub use crate::puzzle::{
    Puzzle, PuzzleView, StartMode, Submission, SubmissionOutcome, TransitionKind,
};

pub use crate::stats::Statistics;

pub use crate::persistence::{
    DailyGateStore, FileStore, KeyValueStore, MemoryStore, SavedGameState, StoreError,
};

pub use crate::events::{EventLog, ObserverId, PuzzleEvent, PuzzleObserver};
