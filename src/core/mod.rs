//! Core puzzle types: words, slots, configuration, RNG, clock.
//!
//! This module contains the building blocks the engine is assembled from.
//! None of them know about persistence or observers.

pub mod word;
pub mod slots;
pub mod rng;
pub mod config;
pub mod clock;

pub use word::{Word, WordId};
pub use slots::{PairIndex, SlotArray, PAIR_COUNT, SLOT_COUNT};
pub use rng::GameRng;
pub use config::{ConfigError, PairDefinition, PairMatching, PuzzleConfig, MAX_DELAY_MS};
pub use clock::{Clock, ManualClock, SystemClock};
