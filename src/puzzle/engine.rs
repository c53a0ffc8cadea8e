//! The puzzle engine.
//!
//! `Puzzle` owns one day's game: the word pool, the ten-slot board, attempt
//! tracking, completion, statistics, pending timers and observers. Every
//! operation runs to completion synchronously.
//!
//! ## Lifecycle
//!
//! ```text
//! InProgress --submit--> Submitted --timer/edit--> InProgress
//!                            |
//!                            +--(all correct | no tries)--> Completed
//! ```
//!
//! `Completed` is terminal for the calendar day and restored read-only on
//! every later open of the same day.
//!
//! ## Invalid input
//!
//! Board mutations never fail loudly. Out-of-range slots, duplicate
//! placements, edits to locked pairs and edits after completion are
//! ignored and reported as `false`.

use chrono::{Duration, NaiveDateTime};
use im::{OrdSet, Vector};
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::core::clock::{same_day, until_next_midnight};
use crate::core::{
    Clock, ConfigError, GameRng, PairDefinition, PairIndex, PuzzleConfig, SlotArray, Word,
    WordId, PAIR_COUNT, SLOT_COUNT,
};
use crate::events::{ObserverId, PuzzleEvent, PuzzleObserver, ObserverRegistry};
use crate::persistence::{
    load_snapshot, load_statistics, save_snapshot, save_statistics, DailyGateStore,
    KeyValueStore, SavedGameState,
};
use crate::stats::Statistics;

use super::message;
use super::state::{
    AttemptState, CompletionState, PairResults, PuzzleView, StartMode, Submission,
    SubmissionOutcome,
};
use super::timer::{TimerQueue, TransitionKind};

/// One day's puzzle.
pub struct Puzzle<S: KeyValueStore, C: Clock> {
    config: PuzzleConfig,
    store: S,
    clock: C,
    rng: GameRng,
    start_mode: StartMode,

    words: Vector<Word>,
    slots: SlotArray,
    attempt: AttemptState,
    completion: CompletionState,
    statistics: Statistics,

    timers: TimerQueue,
    observers: ObserverRegistry,
}

impl<S: KeyValueStore, C: Clock> Puzzle<S, C> {
    /// Open today's puzzle.
    ///
    /// Picks one of three start modes:
    /// - today's completed snapshot exists: restore it verbatim
    /// - today's puzzle was already started: rebuild the pool unshuffled
    /// - otherwise: shuffle a fresh pool and record today as played
    pub fn new(config: PuzzleConfig, store: S, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = GameRng::from_optional_seed(config.seed);
        let statistics = load_statistics(&store);

        let mut puzzle = Self {
            attempt: AttemptState::new(config.max_tries),
            config,
            store,
            clock,
            rng,
            start_mode: StartMode::FreshDay,
            words: Vector::new(),
            slots: SlotArray::new(),
            completion: CompletionState::default(),
            statistics,
            timers: TimerQueue::new(),
            observers: ObserverRegistry::new(),
        };
        puzzle.start_day();
        Ok(puzzle)
    }

    fn start_day(&mut self) {
        let now = self.clock.now();

        if let Some(saved) = self.completed_snapshot(now) {
            self.restore(saved);
            self.start_mode = StartMode::CompletedToday;
        } else if self.store.last_played().is_some_and(|d| same_day(d, now)) {
            self.words = self.config.pool_words().into_iter().collect();
            self.start_mode = StartMode::ResumedToday;
        } else {
            let mut words = self.config.pool_words();
            self.rng.shuffle(&mut words);
            debug!(seed = self.rng.seed(), "pool shuffled");
            self.words = words.into_iter().collect();
            if let Err(e) = self.store.set_last_played(now) {
                warn!(error = %e, "failed to record play date");
            }
            self.start_mode = StartMode::FreshDay;
        }

        info!(mode = ?self.start_mode, date = %now.date(), "puzzle started");
    }

    /// Today's snapshot, if the gate and the snapshot both say today.
    fn completed_snapshot(&self, now: NaiveDateTime) -> Option<SavedGameState> {
        let completed = self.store.last_completed()?;
        if !same_day(completed, now) {
            return None;
        }
        match load_snapshot(&self.store, self.config.max_tries) {
            Some(saved) if same_day(saved.completion_date, now) => Some(saved),
            Some(_) => {
                warn!("completion date set but snapshot is from another day");
                None
            }
            None => {
                warn!("completion date set but no usable snapshot");
                None
            }
        }
    }

    fn restore(&mut self, saved: SavedGameState) {
        for (i, word) in saved.active_words.iter().enumerate() {
            if let Some(word) = word {
                self.slots.set(i, word.id);
            }
        }
        self.words = saved
            .words
            .into_iter()
            .map(|mut w| {
                w.is_paired = self.slots.contains(w.id);
                w
            })
            .collect();

        self.attempt.correct_pairs = saved.correct_pair_indices.into_iter().collect();
        self.attempt.tries_remaining = saved.tries_remaining;
        self.completion = CompletionState {
            game_completed: true,
            results_message: saved.results_message,
            showing_correct_answers: self.attempt.correct_pairs.len() < PAIR_COUNT,
        };
    }

    // === Board Operations ===

    /// Place a pool word into a slot, evicting the slot's occupant.
    ///
    /// Ignored if the slot is out of range or locked, the word is unknown
    /// or already on the board, or the game is over.
    pub fn place_word(&mut self, word: WordId, slot: usize) -> bool {
        if self.completion.game_completed
            || slot >= SLOT_COUNT
            || self.is_word_in_correct_pair(slot)
        {
            return false;
        }
        if self.slots.contains(word) || self.pool_index(word).is_none() {
            return false;
        }

        let evicted = self.slots.set(slot, word);
        if let Some(prev) = evicted {
            self.set_paired(prev, false);
        }
        self.set_paired(word, true);

        debug!(%word, slot, ?evicted, "word placed");
        self.observers.emit(&PuzzleEvent::WordPlaced { word, slot, evicted });
        self.clear_feedback_after_edit();
        true
    }

    /// Place a word into the lowest empty slot. Returns the slot used.
    pub fn place_in_next_slot(&mut self, word: WordId) -> Option<usize> {
        let slot = self.find_next_available_slot()?;
        self.place_word(word, slot).then_some(slot)
    }

    /// Return a slot's word to the pool.
    ///
    /// Ignored if the slot is out of range, empty or locked, or the game is over.
    pub fn remove_word(&mut self, slot: usize) -> bool {
        if self.completion.game_completed
            || slot >= SLOT_COUNT
            || self.is_word_in_correct_pair(slot)
        {
            return false;
        }
        let Some(word) = self.slots.take(slot) else {
            return false;
        };

        self.set_paired(word, false);

        debug!(%word, slot, "word removed");
        self.observers.emit(&PuzzleEvent::WordRemoved { word, slot });
        self.clear_feedback_after_edit();
        true
    }

    /// Exchange two slots' occupants (either or both may be empty).
    ///
    /// Ignored if either slot is out of range or locked, the slots are the
    /// same, or the game is over. An accepted swap always clears interim
    /// feedback, even when both slots were empty.
    pub fn swap_words(&mut self, from: usize, to: usize) -> bool {
        if self.completion.game_completed
            || from >= SLOT_COUNT
            || to >= SLOT_COUNT
            || from == to
        {
            return false;
        }
        if self.is_word_in_correct_pair(from) || self.is_word_in_correct_pair(to) {
            return false;
        }

        self.slots.swap(from, to);

        debug!(from, to, "words swapped");
        self.observers.emit(&PuzzleEvent::WordsSwapped { from, to });
        self.clear_feedback_after_edit();
        true
    }

    /// Lowest-indexed empty slot, or `None` when the board is full.
    #[must_use]
    pub fn find_next_available_slot(&self) -> Option<usize> {
        self.slots.first_empty()
    }

    // === Submission ===

    /// Score the board and spend one try.
    ///
    /// Callers should only submit a full board; pairs with an empty slot are
    /// skipped (`None` in the results) rather than scored wrong. Locked pairs
    /// stay correct without being re-checked.
    ///
    /// Returns `None`, changing nothing, once the game is over.
    pub fn submit(&mut self) -> Option<Submission> {
        if self.completion.game_completed || self.attempt.tries_remaining == 0 {
            debug!("submit ignored: game over");
            return None;
        }
        if !self.all_words_placed() {
            debug!(filled = self.slots.filled_count(), "submitting a partial board");
        }

        self.timers.cancel_kind(TransitionKind::ClearFeedback);

        let mut results: PairResults = SmallVec::new();
        let mut correct = OrdSet::new();
        for pair in PairIndex::all() {
            let result = if self.attempt.is_locked(pair) {
                Some(true)
            } else {
                self.score_pair(pair)
            };
            if result == Some(true) {
                correct.insert(pair);
            }
            results.push(result);
        }

        self.attempt.correct_pairs = correct;
        self.attempt.pair_results = results.clone();
        self.attempt.has_submitted = true;
        self.attempt.tries_remaining -= 1;

        let correct_count = self.attempt.correct_pairs.len();
        let tries_remaining = self.attempt.tries_remaining;
        let outcome = if correct_count == PAIR_COUNT {
            SubmissionOutcome::Won
        } else if tries_remaining == 0 {
            SubmissionOutcome::Lost
        } else {
            SubmissionOutcome::Continue
        };

        self.completion.results_message = match outcome {
            SubmissionOutcome::Won => message::victory(),
            SubmissionOutcome::Lost => message::defeat(correct_count),
            SubmissionOutcome::Continue => message::interim(correct_count, tries_remaining),
        };

        info!(correct_count, tries_remaining, ?outcome, "submission scored");
        self.observers.emit(&PuzzleEvent::Submitted {
            correct_count,
            tries_remaining,
        });

        self.handle_completion(outcome);

        Some(Submission {
            pair_results: results,
            correct_count,
            tries_remaining,
            outcome,
        })
    }

    fn score_pair(&self, pair: PairIndex) -> Option<bool> {
        let (first, second) = self.slots.pair(pair);
        let first = self.word(first?)?;
        let second = self.word(second?)?;
        Some(self.config.is_correct(pair, first.text(), second.text()))
    }

    fn handle_completion(&mut self, outcome: SubmissionOutcome) {
        let now = self.clock.now();

        if outcome == SubmissionOutcome::Continue {
            let due = due_after(now, self.config.feedback_delay_ms);
            self.timers.schedule(TransitionKind::ClearFeedback, due);
            return;
        }

        self.completion.game_completed = true;
        self.save_completed_state(now);

        if outcome == SubmissionOutcome::Lost {
            let due = due_after(now, self.config.reveal_delay_ms);
            self.timers.schedule(TransitionKind::RevealAnswers, due);
        }

        let won = outcome == SubmissionOutcome::Won;
        info!(won, "game completed");
        self.observers.emit(&PuzzleEvent::GameCompleted { won });

        self.update_statistics();
    }

    fn save_completed_state(&mut self, now: NaiveDateTime) {
        let saved = SavedGameState {
            words: self.words.iter().cloned().collect(),
            active_words: self
                .slots
                .iter()
                .map(|slot| slot.and_then(|id| self.word(id).cloned()))
                .collect(),
            results_message: self.completion.results_message.clone(),
            correct_pair_indices: self.attempt.correct_pairs.iter().copied().collect(),
            tries_remaining: self.attempt.tries_remaining,
            completion_date: now,
        };

        if let Err(e) = save_snapshot(&mut self.store, &saved) {
            warn!(error = %e, "failed to save completed game");
        }
        if let Err(e) = self.store.set_last_completed(now) {
            warn!(error = %e, "failed to record completion date");
        }
    }

    fn update_statistics(&mut self) {
        let recorded = self.statistics.record_outcome(
            self.attempt.tries_remaining,
            self.config.max_tries,
            self.attempt.correct_pairs.len(),
        );

        if let Err(e) = save_statistics(&mut self.store, &self.statistics) {
            warn!(error = %e, "failed to save statistics");
        }

        info!(
            won = recorded.won,
            mistakes = recorded.mistakes,
            games_played = self.statistics.games_played,
            "statistics updated"
        );
        self.observers.emit(&PuzzleEvent::StatisticsUpdated {
            games_played: self.statistics.games_played,
            current_streak: self.statistics.current_streak,
        });
    }

    // === Timers ===

    /// Fire every delayed transition due now. Returns how many fired.
    pub fn advance_timers(&mut self) -> usize {
        let due = self.timers.take_due(self.clock.now());
        let fired = due.len();

        for transition in due {
            debug!(kind = ?transition.kind, "timer fired");
            match transition.kind {
                TransitionKind::ClearFeedback => {
                    if !self.completion.game_completed {
                        self.clear_feedback();
                    }
                }
                TransitionKind::RevealAnswers => {
                    if self.completion.game_completed && !self.completion.showing_correct_answers {
                        self.completion.showing_correct_answers = true;
                        self.observers.emit(&PuzzleEvent::AnswersRevealed);
                    }
                }
            }
        }
        fired
    }

    /// When the next delayed transition is due.
    #[must_use]
    pub fn next_timer_due(&self) -> Option<NaiveDateTime> {
        self.timers.next_due()
    }

    /// Whether a delayed transition of this kind is queued.
    #[must_use]
    pub fn is_timer_pending(&self, kind: TransitionKind) -> bool {
        self.timers.is_pending(kind)
    }

    /// Cancel all pending timers. Call when tearing the engine down.
    pub fn shutdown(&mut self) {
        if !self.timers.is_empty() {
            debug!(pending = self.timers.len(), "cancelling timers");
        }
        self.timers.cancel_all();
    }

    fn clear_feedback(&mut self) {
        if self.attempt.has_submitted {
            self.attempt.has_submitted = false;
            self.attempt.pair_results.clear();
            self.observers.emit(&PuzzleEvent::FeedbackCleared);
        }
    }

    fn clear_feedback_after_edit(&mut self) {
        self.timers.cancel_kind(TransitionKind::ClearFeedback);
        self.clear_feedback();
    }

    // === Observers ===

    /// Register an observer for state changes.
    pub fn subscribe(&mut self, observer: impl PuzzleObserver + 'static) -> ObserverId {
        self.observers.subscribe(observer)
    }

    /// Remove an observer.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    // === Queries ===

    /// All exposed state in one O(1)-clone value.
    #[must_use]
    pub fn view(&self) -> PuzzleView {
        PuzzleView {
            words: self.words.clone(),
            slots: self.slots,
            tries_remaining: self.attempt.tries_remaining,
            has_submitted: self.attempt.has_submitted,
            pair_results: self.attempt.pair_results.clone(),
            correct_pairs: self.attempt.correct_pairs.clone(),
            game_completed: self.completion.game_completed,
            results_message: self.completion.results_message.clone(),
            showing_correct_answers: self.completion.showing_correct_answers,
            statistics: self.statistics.clone(),
        }
    }

    /// Tri-state pair colouring: locked pairs are `Some(true)`, other pairs
    /// show the latest submission's result while feedback is visible.
    #[must_use]
    pub fn is_pair_correct(&self, pair: PairIndex) -> Option<bool> {
        if self.attempt.is_locked(pair) {
            return Some(true);
        }
        if !self.attempt.has_submitted {
            return None;
        }
        self.attempt.pair_results.get(pair.index()).copied().flatten()
    }

    /// Whether a slot belongs to a locked pair.
    #[must_use]
    pub fn is_word_in_correct_pair(&self, slot: usize) -> bool {
        PairIndex::of_slot(slot).is_some_and(|pair| self.attempt.is_locked(pair))
    }

    /// Whether every slot is filled.
    #[must_use]
    pub fn all_words_placed(&self) -> bool {
        self.slots.is_full()
    }

    /// Pool words not on the board, in pool order.
    pub fn unpaired_words(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(|w| !w.is_paired)
    }

    /// The target pairs, for the answer reveal.
    #[must_use]
    pub fn correct_answers(&self) -> &[PairDefinition] {
        &self.config.pairs
    }

    /// Look up a pool word.
    #[must_use]
    pub fn word(&self, id: WordId) -> Option<&Word> {
        self.words.iter().find(|w| w.id == id)
    }

    /// The word in a slot.
    #[must_use]
    pub fn word_at(&self, slot: usize) -> Option<&Word> {
        self.slots.get(slot).and_then(|id| self.word(id))
    }

    /// Find a pool word by its text.
    #[must_use]
    pub fn word_by_text(&self, text: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.text() == text)
    }

    /// The word pool in display order.
    #[must_use]
    pub fn words(&self) -> &Vector<Word> {
        &self.words
    }

    /// The board.
    #[must_use]
    pub fn slots(&self) -> &SlotArray {
        &self.slots
    }

    #[must_use]
    pub fn tries_remaining(&self) -> u8 {
        self.attempt.tries_remaining
    }

    #[must_use]
    pub fn has_submitted(&self) -> bool {
        self.attempt.has_submitted
    }

    #[must_use]
    pub fn pair_results(&self) -> &[Option<bool>] {
        &self.attempt.pair_results
    }

    #[must_use]
    pub fn correct_pairs(&self) -> &OrdSet<PairIndex> {
        &self.attempt.correct_pairs
    }

    #[must_use]
    pub fn game_completed(&self) -> bool {
        self.completion.game_completed
    }

    #[must_use]
    pub fn results_message(&self) -> &str {
        &self.completion.results_message
    }

    #[must_use]
    pub fn showing_correct_answers(&self) -> bool {
        self.completion.showing_correct_answers
    }

    #[must_use]
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// How today's session was initialized.
    #[must_use]
    pub fn start_mode(&self) -> StartMode {
        self.start_mode
    }

    /// Whether a fresh puzzle can still be started today.
    #[must_use]
    pub fn can_play_today(&self) -> bool {
        let now = self.clock.now();
        !self.store.last_played().is_some_and(|d| same_day(d, now))
    }

    /// Whether today's puzzle has a completion record.
    #[must_use]
    pub fn puzzle_completed_today(&self) -> bool {
        let now = self.clock.now();
        self.store.last_completed().is_some_and(|d| same_day(d, now))
    }

    /// Time left until the next puzzle unlocks at local midnight.
    #[must_use]
    pub fn time_until_next_puzzle(&self) -> Duration {
        until_next_midnight(self.clock.now())
    }

    /// Share text for the current result, dated today.
    #[must_use]
    pub fn share_text(&self) -> String {
        message::share_text(
            &self.config.title,
            self.clock.today(),
            self.attempt.correct_pairs.len(),
            self.attempt.tries_remaining,
            self.config.max_tries,
        )
    }

    /// Borrow the backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Tear down and hand back the store.
    pub fn into_store(mut self) -> S {
        self.shutdown();
        self.store
    }

    // === Internals ===

    fn pool_index(&self, id: WordId) -> Option<usize> {
        self.words.iter().position(|w| w.id == id)
    }

    fn set_paired(&mut self, id: WordId, paired: bool) {
        if let Some(word) = self.pool_index(id).and_then(|i| self.words.get_mut(i)) {
            word.is_paired = paired;
        }
    }
}

/// Deadline `delay_ms` after `now`. Out-of-range delays fire immediately.
fn due_after(now: NaiveDateTime, delay_ms: u64) -> NaiveDateTime {
    i64::try_from(delay_ms)
        .ok()
        .and_then(Duration::try_milliseconds)
        .and_then(|delay| now.checked_add_signed(delay))
        .unwrap_or_else(|| {
            warn!(delay_ms, "timer delay out of range, firing immediately");
            now
        })
}

impl<S: KeyValueStore, C: Clock> std::fmt::Debug for Puzzle<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Puzzle")
            .field("start_mode", &self.start_mode)
            .field("slots", &self.slots)
            .field("attempt", &self.attempt)
            .field("completion", &self.completion)
            .field("timers", &self.timers.len())
            .field("observers", &self.observers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;
    use crate::persistence::MemoryStore;
    use chrono::NaiveDate;

    fn clock() -> ManualClock {
        ManualClock::new(
            NaiveDate::from_ymd_opt(2026, 4, 10)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        )
    }

    fn puzzle() -> Puzzle<MemoryStore, ManualClock> {
        Puzzle::new(PuzzleConfig::default().with_seed(7), MemoryStore::new(), clock()).unwrap()
    }

    fn id_of(p: &Puzzle<MemoryStore, ManualClock>, text: &str) -> WordId {
        p.word_by_text(text).unwrap().id
    }

    #[test]
    fn test_fresh_pool_is_a_permutation() {
        let p = puzzle();
        assert_eq!(p.start_mode(), StartMode::FreshDay);
        assert_eq!(p.words().len(), SLOT_COUNT);

        let mut ids: Vec<_> = p.words().iter().map(|w| w.id.raw()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..SLOT_COUNT as u32).collect::<Vec<_>>());
        assert!(p.words().iter().all(|w| !w.is_paired()));
    }

    #[test]
    fn test_place_marks_paired_and_evicts() {
        let mut p = puzzle();
        let second = id_of(&p, "Second");
        let hand = id_of(&p, "Hand");

        assert!(p.place_word(second, 0));
        assert!(p.word(second).unwrap().is_paired());

        assert!(p.place_word(hand, 0));
        assert!(!p.word(second).unwrap().is_paired());
        assert!(p.word(hand).unwrap().is_paired());
        assert_eq!(p.slots().get(0), Some(hand));
    }

    #[test]
    fn test_place_duplicate_is_noop() {
        let mut p = puzzle();
        let second = id_of(&p, "Second");
        let hand = id_of(&p, "Hand");
        p.place_word(second, 0);
        p.place_word(hand, 1);

        assert!(!p.place_word(second, 1));
        assert_eq!(p.slots().get(1), Some(hand));
        assert!(p.word(hand).unwrap().is_paired());
    }

    #[test]
    fn test_place_unknown_or_out_of_range() {
        let mut p = puzzle();
        assert!(!p.place_word(WordId::new(99), 0));
        assert!(!p.place_word(id_of(&p, "Rock"), SLOT_COUNT));
        assert_eq!(p.slots().filled_count(), 0);
    }

    #[test]
    fn test_place_in_next_slot() {
        let mut p = puzzle();
        let rock = id_of(&p, "Rock");
        let star = id_of(&p, "Star");
        assert_eq!(p.place_in_next_slot(rock), Some(0));
        assert_eq!(p.place_in_next_slot(star), Some(1));
        assert_eq!(p.place_in_next_slot(star), None);
        assert_eq!(p.find_next_available_slot(), Some(2));
    }

    #[test]
    fn test_remove_and_swap_noops() {
        let mut p = puzzle();
        assert!(!p.remove_word(0));
        assert!(!p.remove_word(SLOT_COUNT));
        assert!(!p.swap_words(0, SLOT_COUNT));

        // Two empty slots still count as a board edit.
        assert!(p.swap_words(0, 1));
        assert_eq!(p.slots().filled_count(), 0);

        let cold = id_of(&p, "Cold");
        p.place_word(cold, 3);
        assert!(!p.swap_words(3, 3));
        assert!(p.swap_words(3, 4));
        assert_eq!(p.slots().get(4), Some(cold));
        assert!(p.remove_word(4));
        assert!(!p.word(cold).unwrap().is_paired());
    }

    #[test]
    fn test_partial_submission_skips_empty_pairs() {
        let mut p = puzzle();
        let second = id_of(&p, "Second");
        let hand = id_of(&p, "Hand");
        p.place_word(second, 0);
        p.place_word(hand, 1);

        let submission = p.submit().unwrap();
        assert_eq!(submission.pair_results[0], Some(true));
        assert!(submission.pair_results[1..].iter().all(Option::is_none));
        assert_eq!(submission.correct_count, 1);
        assert_eq!(p.tries_remaining(), 2);
        assert_eq!(p.is_pair_correct(PairIndex::new(1).unwrap()), None);
    }

    #[test]
    fn test_due_after_never_overflows() {
        let now = clock().now();
        assert_eq!(due_after(now, 2_000), now + Duration::seconds(2));
        assert_eq!(due_after(now, u64::MAX), now);
        assert_eq!(due_after(now, i64::MAX as u64), now);
    }

    #[test]
    fn test_debug_does_not_panic() {
        let p = puzzle();
        assert!(format!("{p:?}").contains("FreshDay"));
    }
}
