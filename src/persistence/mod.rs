//! Persistence: key-value stores, the daily gate, and the saved schema.
//!
//! The engine reads and writes four independent keys (see `schema`).
//! Nothing here is transactional; loaders tolerate any subset of keys being
//! missing or corrupt.

pub mod store;
pub mod schema;
pub mod gate;

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use schema::{
    load_snapshot, load_statistics, save_snapshot, save_statistics, SavedGameState,
    GAME_STATE_KEY, LAST_COMPLETED_KEY, LAST_PLAYED_KEY, STATISTICS_KEY,
};
pub use gate::DailyGateStore;
