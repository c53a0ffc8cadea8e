//! Daily gate dates.
//!
//! `DailyGateStore` is the narrow view of persistence the daily gate needs:
//! when the puzzle was last started and last completed. Every
//! `KeyValueStore` provides it through the schema keys.

use chrono::NaiveDateTime;
use tracing::warn;

use super::schema::{read_json, write_json, LAST_COMPLETED_KEY, LAST_PLAYED_KEY};
use super::store::{KeyValueStore, StoreError};

/// Access to the two daily gate dates.
///
/// Reads never fail: a missing or unreadable date is `None`.
pub trait DailyGateStore {
    /// When a fresh puzzle was last shuffled.
    fn last_played(&self) -> Option<NaiveDateTime>;

    /// Record a fresh start.
    fn set_last_played(&mut self, at: NaiveDateTime) -> Result<(), StoreError>;

    /// When a puzzle was last completed.
    fn last_completed(&self) -> Option<NaiveDateTime>;

    /// Record a completion.
    fn set_last_completed(&mut self, at: NaiveDateTime) -> Result<(), StoreError>;
}

fn read_date<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<NaiveDateTime> {
    read_json(store, key).unwrap_or_else(|e| {
        warn!(error = %e, key, "ignoring unreadable gate date");
        None
    })
}

impl<S: KeyValueStore + ?Sized> DailyGateStore for S {
    fn last_played(&self) -> Option<NaiveDateTime> {
        read_date(self, LAST_PLAYED_KEY)
    }

    fn set_last_played(&mut self, at: NaiveDateTime) -> Result<(), StoreError> {
        write_json(self, LAST_PLAYED_KEY, &at)
    }

    fn last_completed(&self) -> Option<NaiveDateTime> {
        read_date(self, LAST_COMPLETED_KEY)
    }

    fn set_last_completed(&mut self, at: NaiveDateTime) -> Result<(), StoreError> {
        write_json(self, LAST_COMPLETED_KEY, &at)
    }
}
