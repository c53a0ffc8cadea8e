//! Event notification for UI collaborators.
//!
//! The engine emits a `PuzzleEvent` for every accepted transition. Hosts
//! register `PuzzleObserver`s (any `FnMut(&PuzzleEvent)` works) and read
//! the engine's state in response.

pub mod event;
pub mod observer;

pub use event::PuzzleEvent;
pub use observer::{EventLog, ObserverId, ObserverRegistry, PuzzleObserver};
