//! Results messages and share text.

use chrono::NaiveDate;

use crate::core::PAIR_COUNT;

/// Shown when every pair is correct.
pub fn victory() -> String {
    "Congratulations! You found all pairs!".to_string()
}

/// Shown when the last try is spent without solving the puzzle.
pub fn defeat(correct_count: usize) -> String {
    format!("Game over! You found {correct_count} out of {PAIR_COUNT} pairs.")
}

/// Shown after a submission that leaves the game open.
pub fn interim(correct_count: usize, tries_remaining: u8) -> String {
    format!("You found {correct_count} correct pairs!\nTries remaining: {tries_remaining}")
}

/// Fixed-template summary for sharing a finished game.
///
/// The emoji celebrates when any tries were left, and commiserates otherwise.
///
/// ```
/// use chrono::NaiveDate;
/// use mashup::puzzle::message::share_text;
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// assert_eq!(
///     share_text("MashUp", date, 5, 2, 3),
///     "MashUp 2026-10-19 🎉\nScore: 5/5\nAttempts: 1/3"
/// );
/// ```
pub fn share_text(
    title: &str,
    date: NaiveDate,
    correct_count: usize,
    tries_remaining: u8,
    max_tries: u8,
) -> String {
    let emoji = if tries_remaining > 0 { "🎉" } else { "😔" };
    let attempts_used = max_tries.saturating_sub(tries_remaining);
    format!(
        "{title} {} {emoji}\nScore: {correct_count}/{PAIR_COUNT}\nAttempts: {attempts_used}/{max_tries}",
        date.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert!(victory().contains("Congratulations"));
        assert_eq!(defeat(2), "Game over! You found 2 out of 5 pairs.");
        assert_eq!(interim(3, 1), "You found 3 correct pairs!\nTries remaining: 1");
    }

    #[test]
    fn test_share_text_loss() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
        assert_eq!(
            share_text("MashUp", date, 3, 0, 3),
            "MashUp 2026-01-09 😔\nScore: 3/5\nAttempts: 3/3"
        );
    }

    #[test]
    fn test_share_text_last_try_win_commiserates() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
        let text = share_text("MashUp", date, 5, 0, 3);
        assert!(text.starts_with("MashUp 2026-01-09 😔"));
        assert!(text.contains("Score: 5/5"));
    }
}
