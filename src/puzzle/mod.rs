//! Puzzle engine: the daily game state machine.
//!
//! - `engine`: `Puzzle`, board operations, submission, completion
//! - `state`: attempt/completion records and the UI view
//! - `timer`: cancellable delayed transitions
//! - `message`: results messages and share text

pub mod engine;
pub mod state;
pub mod timer;
pub mod message;

pub use engine::Puzzle;
pub use state::{
    AttemptState, CompletionState, PairResults, PuzzleView, StartMode, Submission,
    SubmissionOutcome,
};
pub use timer::{ScheduledTransition, TimerId, TimerQueue, TransitionKind};
pub use message::share_text;
