//! Word identification and the word pool entry.
//!
//! Every word card on the board has a unique `WordId`. Ids are allocated in
//! definition order (pair 0 first word = 0, pair 0 second word = 1, ...)
//! before the pool is shuffled, so the same puzzle always yields the same
//! id for the same text.
//!
//! ```
//! use mashup::core::{Word, WordId};
//!
//! let word = Word::new(WordId::new(3), "Star");
//! assert_eq!(word.text(), "Star");
//! assert!(!word.is_paired());
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a word card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(pub u32);

impl WordId {
    /// Create a new word ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for WordId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Word({})", self.0)
    }
}

/// A word card in the pool.
///
/// `text` never changes after creation. `is_paired` mirrors whether the
/// word currently occupies a slot; only the engine flips it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    /// Identity of the card.
    pub id: WordId,
    text: String,
    pub(crate) is_paired: bool,
}

impl Word {
    /// Create an unpaired word.
    pub fn new(id: WordId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_paired: false,
        }
    }

    /// The word's text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the word currently sits in a slot.
    #[must_use]
    pub fn is_paired(&self) -> bool {
        self.is_paired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_id_display() {
        assert_eq!(format!("{}", WordId::new(7)), "Word(7)");
        assert_eq!(WordId::from(7).raw(), 7);
    }

    #[test]
    fn test_new_word_is_unpaired() {
        let word = Word::new(WordId::new(0), "Second");
        assert_eq!(word.text(), "Second");
        assert!(!word.is_paired());
    }

    #[test]
    fn test_word_serde_uses_camel_case() {
        let mut word = Word::new(WordId::new(4), "Cold");
        word.is_paired = true;

        let json = serde_json::to_value(&word).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["text"], "Cold");
        assert_eq!(json["isPaired"], true);

        let back: Word = serde_json::from_value(json).unwrap();
        assert_eq!(back, word);
    }
}
