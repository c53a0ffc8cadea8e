//! The ten-slot board and its grouping into five ordered pairs.
//!
//! Pair `i` occupies slots `2i` (first word) and `2i + 1` (second word).
//! Slots hold `WordId`s; the word texts live in the engine's pool.

use serde::{Deserialize, Serialize};

use super::word::WordId;

/// Number of word pairs in a puzzle.
pub const PAIR_COUNT: usize = 5;

/// Number of slots on the board.
pub const SLOT_COUNT: usize = PAIR_COUNT * 2;

/// Index of one of the five pairs (0-4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PairIndex(u8);

impl PairIndex {
    /// Create a pair index. Returns `None` when `index >= PAIR_COUNT`.
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        (index < PAIR_COUNT).then(|| Self(index as u8))
    }

    /// The pair a slot belongs to. Returns `None` for out-of-range slots.
    ///
    /// ```
    /// use mashup::core::PairIndex;
    ///
    /// assert_eq!(PairIndex::of_slot(7), PairIndex::new(3));
    /// assert_eq!(PairIndex::of_slot(10), None);
    /// ```
    #[must_use]
    pub fn of_slot(slot: usize) -> Option<Self> {
        Self::new(slot / 2)
    }

    /// Iterate over all pair indices in order.
    pub fn all() -> impl Iterator<Item = PairIndex> {
        (0..PAIR_COUNT as u8).map(PairIndex)
    }

    /// Raw index (0-4).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Slot holding the pair's first word.
    #[must_use]
    pub const fn first_slot(self) -> usize {
        self.0 as usize * 2
    }

    /// Slot holding the pair's second word.
    #[must_use]
    pub const fn second_slot(self) -> usize {
        self.0 as usize * 2 + 1
    }
}

impl TryFrom<usize> for PairIndex {
    type Error = String;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index).ok_or_else(|| format!("pair index {index} out of range"))
    }
}

impl From<PairIndex> for usize {
    fn from(pair: PairIndex) -> Self {
        pair.index()
    }
}

impl std::fmt::Display for PairIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// Fixed-size board of optional word references.
///
/// Does not itself enforce word uniqueness; the engine checks
/// `contains` before every placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotArray {
    slots: [Option<WordId>; SLOT_COUNT],
}

impl SlotArray {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupant of a slot. Out-of-range slots read as empty.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<WordId> {
        self.slots.get(slot).copied().flatten()
    }

    /// Put a word into a slot, returning the previous occupant.
    ///
    /// Out-of-range slots are ignored.
    pub fn set(&mut self, slot: usize, word: WordId) -> Option<WordId> {
        self.slots.get_mut(slot).and_then(|s| s.replace(word))
    }

    /// Empty a slot, returning its occupant.
    pub fn take(&mut self, slot: usize) -> Option<WordId> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// Exchange the occupants of two slots.
    ///
    /// Out-of-range slots are ignored.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a < SLOT_COUNT && b < SLOT_COUNT {
            self.slots.swap(a, b);
        }
    }

    /// Whether a word occupies any slot.
    #[must_use]
    pub fn contains(&self, word: WordId) -> bool {
        self.position_of(word).is_some()
    }

    /// Slot currently holding a word.
    #[must_use]
    pub fn position_of(&self, word: WordId) -> Option<usize> {
        self.slots.iter().position(|s| *s == Some(word))
    }

    /// Lowest-indexed empty slot, or `None` when the board is full.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether every slot is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled_count() == SLOT_COUNT
    }

    /// Occupants of a pair's (first, second) slots.
    #[must_use]
    pub fn pair(&self, pair: PairIndex) -> (Option<WordId>, Option<WordId>) {
        (self.get(pair.first_slot()), self.get(pair.second_slot()))
    }

    /// Iterate over all slots in order.
    pub fn iter(&self) -> impl Iterator<Item = Option<WordId>> + '_ {
        self.slots.iter().copied()
    }

    /// Raw slot contents.
    #[must_use]
    pub fn as_slice(&self) -> &[Option<WordId>] {
        &self.slots
    }
}

impl From<[Option<WordId>; SLOT_COUNT]> for SlotArray {
    fn from(slots: [Option<WordId>; SLOT_COUNT]) -> Self {
        Self { slots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_index_bounds() {
        assert!(PairIndex::new(4).is_some());
        assert!(PairIndex::new(5).is_none());
        assert_eq!(PairIndex::all().count(), PAIR_COUNT);
    }

    #[test]
    fn test_pair_slots() {
        let pair = PairIndex::new(2).unwrap();
        assert_eq!(pair.first_slot(), 4);
        assert_eq!(pair.second_slot(), 5);
        assert_eq!(PairIndex::of_slot(4), Some(pair));
        assert_eq!(PairIndex::of_slot(5), Some(pair));
    }

    #[test]
    fn test_pair_index_serde_rejects_out_of_range() {
        let pair: PairIndex = serde_json::from_str("3").unwrap();
        assert_eq!(pair.index(), 3);
        assert!(serde_json::from_str::<PairIndex>("5").is_err());
    }

    #[test]
    fn test_set_returns_previous_occupant() {
        let mut slots = SlotArray::new();
        assert_eq!(slots.set(0, WordId::new(1)), None);
        assert_eq!(slots.set(0, WordId::new(2)), Some(WordId::new(1)));
        assert_eq!(slots.get(0), Some(WordId::new(2)));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut slots = SlotArray::new();
        assert_eq!(slots.set(SLOT_COUNT, WordId::new(1)), None);
        assert_eq!(slots.get(SLOT_COUNT), None);
        assert_eq!(slots.take(42), None);
        assert_eq!(slots.filled_count(), 0);
    }

    #[test]
    fn test_first_empty() {
        let mut slots = SlotArray::new();
        assert_eq!(slots.first_empty(), Some(0));

        slots.set(0, WordId::new(0));
        slots.set(2, WordId::new(1));
        assert_eq!(slots.first_empty(), Some(1));

        for i in 0..SLOT_COUNT {
            slots.set(i, WordId::new(i as u32));
        }
        assert_eq!(slots.first_empty(), None);
        assert!(slots.is_full());
    }

    #[test]
    fn test_swap_with_hole() {
        let mut slots = SlotArray::new();
        slots.set(1, WordId::new(9));
        slots.swap(1, 6);

        assert_eq!(slots.get(1), None);
        assert_eq!(slots.get(6), Some(WordId::new(9)));
        assert_eq!(slots.position_of(WordId::new(9)), Some(6));
    }

    #[test]
    fn test_pair_occupants() {
        let mut slots = SlotArray::new();
        slots.set(8, WordId::new(8));
        let pair = PairIndex::new(4).unwrap();
        assert_eq!(slots.pair(pair), (Some(WordId::new(8)), None));
    }
}
