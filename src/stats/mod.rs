//! Statistics tracker.
//!
//! Accumulates win/loss history, streaks and the mistake distribution.
//! The engine calls `Statistics::record_outcome` once per completed game
//! and persists the result immediately.

pub mod statistics;

pub use statistics::{RecordedOutcome, Statistics, MAX_MISTAKES};
