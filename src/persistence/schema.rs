//! Persisted schema: keys, the completed-day snapshot, typed helpers.
//!
//! | Key | Value |
//! |---|---|
//! | `gameStatistics` | `Statistics` |
//! | `savedGameState` | `SavedGameState` |
//! | `lastPlayedDate` | local date-time of the last fresh shuffle |
//! | `lastCompletedDate` | local date-time of the last completion |
//!
//! All values are JSON. Each key is read and written independently; the
//! loaders treat missing or corrupt values as "no prior state".

use chrono::NaiveDateTime;
use rustc_hash::FxHashSet;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{PairIndex, Word, SLOT_COUNT};
use crate::stats::Statistics;

use super::store::{KeyValueStore, StoreError};

/// Key for the statistics record.
pub const STATISTICS_KEY: &str = "gameStatistics";
/// Key for the completed-day snapshot.
pub const GAME_STATE_KEY: &str = "savedGameState";
/// Key for the last fresh-start date.
pub const LAST_PLAYED_KEY: &str = "lastPlayedDate";
/// Key for the last completion date.
pub const LAST_COMPLETED_KEY: &str = "lastCompletedDate";

/// Final state of a completed day, restored verbatim on revisit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGameState {
    /// The word pool in display order.
    pub words: Vec<Word>,
    /// Slot array with holes as `null`.
    pub active_words: Vec<Option<Word>>,
    /// Message shown when the game ended.
    pub results_message: String,
    /// Locked pairs at completion, as a list.
    pub correct_pair_indices: Vec<PairIndex>,
    /// Tries left when the game ended.
    pub tries_remaining: u8,
    /// When the game was completed.
    pub completion_date: NaiveDateTime,
}

impl SavedGameState {
    /// Whether the snapshot describes a board the engine can restore:
    /// exactly `SLOT_COUNT` slots, every slotted word present in the pool,
    /// no word slotted twice, at most `max_tries` tries left, and both slots
    /// of every locked pair filled.
    #[must_use]
    pub fn is_consistent(&self, max_tries: u8) -> bool {
        if self.active_words.len() != SLOT_COUNT || self.tries_remaining > max_tries {
            return false;
        }

        let locked_filled = self.correct_pair_indices.iter().all(|pair| {
            self.active_words[pair.first_slot()].is_some()
                && self.active_words[pair.second_slot()].is_some()
        });
        if !locked_filled {
            return false;
        }

        let pool: FxHashSet<_> = self.words.iter().map(|w| w.id).collect();
        if pool.len() != self.words.len() {
            return false;
        }

        let mut slotted = FxHashSet::default();
        self.active_words
            .iter()
            .flatten()
            .all(|w| pool.contains(&w.id) && slotted.insert(w.id))
    }
}

/// Read and decode a JSON value.
pub fn read_json<S, T>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Decode {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

/// Encode and write a JSON value.
pub fn write_json<S, T>(store: &mut S, key: &str, value: &T) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, raw)
}

/// Load statistics, falling back to `Statistics::empty()` on any failure.
pub fn load_statistics<S: KeyValueStore + ?Sized>(store: &S) -> Statistics {
    match read_json(store, STATISTICS_KEY) {
        Ok(Some(stats)) => stats,
        Ok(None) => Statistics::empty(),
        Err(e) => {
            warn!(error = %e, "discarding unreadable statistics");
            Statistics::empty()
        }
    }
}

/// Persist statistics.
pub fn save_statistics<S: KeyValueStore + ?Sized>(
    store: &mut S,
    stats: &Statistics,
) -> Result<(), StoreError> {
    write_json(store, STATISTICS_KEY, stats)
}

/// Load the completed-day snapshot. `None` when missing, corrupt or
/// inconsistent with a game of `max_tries` tries.
pub fn load_snapshot<S: KeyValueStore + ?Sized>(
    store: &S,
    max_tries: u8,
) -> Option<SavedGameState> {
    match read_json::<_, SavedGameState>(store, GAME_STATE_KEY) {
        Ok(Some(state)) if state.is_consistent(max_tries) => Some(state),
        Ok(Some(_)) => {
            warn!("discarding inconsistent saved game state");
            None
        }
        Ok(None) => None,
        Err(e) => {
            warn!(error = %e, "discarding unreadable saved game state");
            None
        }
    }
}

/// Persist the completed-day snapshot.
pub fn save_snapshot<S: KeyValueStore + ?Sized>(
    store: &mut S,
    state: &SavedGameState,
) -> Result<(), StoreError> {
    write_json(store, GAME_STATE_KEY, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordId;
    use crate::persistence::MemoryStore;
    use chrono::NaiveDate;

    fn snapshot() -> SavedGameState {
        let words: Vec<Word> = ["Second", "Hand"]
            .iter()
            .enumerate()
            .map(|(i, t)| Word::new(WordId::new(i as u32), *t))
            .collect();
        let mut active_words = vec![None; SLOT_COUNT];
        active_words[0] = Some(words[0].clone());
        active_words[1] = Some(words[1].clone());

        SavedGameState {
            words,
            active_words,
            results_message: "Game over! You found 1 out of 5 pairs.".to_string(),
            correct_pair_indices: vec![PairIndex::new(0).unwrap()],
            tries_remaining: 0,
            completion_date: NaiveDate::from_ymd_opt(2026, 5, 4)
                .unwrap()
                .and_hms_opt(9, 15, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_snapshot_json_shape() {
        let json = serde_json::to_value(snapshot()).unwrap();
        assert_eq!(json["triesRemaining"], 0);
        assert_eq!(json["correctPairIndices"], serde_json::json!([0]));
        assert_eq!(json["activeWords"].as_array().unwrap().len(), SLOT_COUNT);
        assert!(json["activeWords"][2].is_null());
        assert_eq!(json["completionDate"], "2026-05-04T09:15:00");
    }

    #[test]
    fn test_snapshot_store_roundtrip() {
        let mut store = MemoryStore::new();
        save_snapshot(&mut store, &snapshot()).unwrap();
        assert_eq!(load_snapshot(&store, 3), Some(snapshot()));
    }

    #[test]
    fn test_missing_values_fall_back() {
        let store = MemoryStore::new();
        assert_eq!(load_statistics(&store), Statistics::empty());
        assert_eq!(load_snapshot(&store, 3), None);
    }

    #[test]
    fn test_corrupt_values_fall_back() {
        let store = MemoryStore::new()
            .with_entry(STATISTICS_KEY, "{broken")
            .with_entry(GAME_STATE_KEY, "[1,2,3]");
        assert_eq!(load_statistics(&store), Statistics::empty());
        assert_eq!(load_snapshot(&store, 3), None);
    }

    #[test]
    fn test_read_json_reports_decode_error() {
        let store = MemoryStore::new().with_entry(STATISTICS_KEY, "nope");
        let err = read_json::<_, Statistics>(&store, STATISTICS_KEY).unwrap_err();
        assert!(matches!(err, StoreError::Decode { ref key, .. } if key == STATISTICS_KEY));
    }

    #[test]
    fn test_inconsistent_snapshot_is_rejected() {
        let mut short = snapshot();
        short.active_words.pop();
        assert!(!short.is_consistent(3));

        let mut stray = snapshot();
        stray.active_words[5] = Some(Word::new(WordId::new(99), "Ghost"));
        assert!(!stray.is_consistent(3));

        let mut doubled = snapshot();
        doubled.active_words[4] = doubled.active_words[0].clone();
        assert!(!doubled.is_consistent(3));

        let mut store = MemoryStore::new();
        save_snapshot(&mut store, &doubled).unwrap();
        assert_eq!(load_snapshot(&store, 3), None);
    }

    #[test]
    fn test_snapshot_tries_bounded_by_config() {
        let mut extra = snapshot();
        extra.tries_remaining = 3;
        assert!(extra.is_consistent(3));
        assert!(!extra.is_consistent(2));

        extra.tries_remaining = 200;
        let mut store = MemoryStore::new();
        save_snapshot(&mut store, &extra).unwrap();
        assert_eq!(load_snapshot(&store, 3), None);
    }

    #[test]
    fn test_locked_pair_on_empty_slots_is_rejected() {
        let mut hollow = snapshot();
        hollow.correct_pair_indices.push(PairIndex::new(3).unwrap());
        assert!(!hollow.is_consistent(3));

        let mut half = snapshot();
        half.active_words[1] = None;
        assert!(!half.is_consistent(3));

        let mut store = MemoryStore::new();
        save_snapshot(&mut store, &hollow).unwrap();
        assert_eq!(load_snapshot(&store, 3), None);
    }
}
