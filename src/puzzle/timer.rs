//! Cancellable delayed transitions.
//!
//! The engine never sleeps. Delayed transitions are queued with a due time
//! and fired when the host calls `Puzzle::advance_timers`. Anything still
//! queued can be cancelled, so a superseded transition never touches state.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Identifier for a scheduled transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u32);

/// What a timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Hide interim submission feedback so the player can keep editing.
    ClearFeedback,
    /// Show the correct answers after a loss.
    RevealAnswers,
}

/// A queued transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTransition {
    pub id: TimerId,
    pub kind: TransitionKind,
    pub due: NaiveDateTime,
}

/// Pending transitions, ordered by due time then scheduling order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TimerQueue {
    pending: Vec<ScheduledTransition>,
    next_id: u32,
}

impl TimerQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a transition.
    pub fn schedule(&mut self, kind: TransitionKind, due: NaiveDateTime) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(ScheduledTransition { id, kind, due });
        id
    }

    /// Cancel one transition. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    /// Cancel every pending transition of a kind. Returns how many were dropped.
    pub fn cancel_kind(&mut self, kind: TransitionKind) -> usize {
        let before = self.pending.len();
        self.pending.retain(|t| t.kind != kind);
        before - self.pending.len()
    }

    /// Cancel everything.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Remove and return every transition due at or before `now`.
    pub fn take_due(&mut self, now: NaiveDateTime) -> Vec<ScheduledTransition> {
        let (mut due, rest): (Vec<_>, Vec<_>) = self.pending.drain(..).partition(|t| t.due <= now);
        self.pending = rest;
        due.sort_by_key(|t| (t.due, t.id));
        due
    }

    /// Earliest pending due time.
    #[must_use]
    pub fn next_due(&self) -> Option<NaiveDateTime> {
        self.pending.iter().map(|t| t.due).min()
    }

    /// Whether a transition of this kind is queued.
    #[must_use]
    pub fn is_pending(&self, kind: TransitionKind) -> bool {
        self.pending.iter().any(|t| t.kind == kind)
    }

    /// Number of queued transitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn t0() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_take_due_respects_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule(TransitionKind::ClearFeedback, t0() + Duration::seconds(2));

        assert!(queue.take_due(t0() + Duration::seconds(1)).is_empty());
        assert_eq!(queue.len(), 1);

        let fired = queue.take_due(t0() + Duration::seconds(2));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].kind, TransitionKind::ClearFeedback);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_take_due_orders_by_deadline() {
        let mut queue = TimerQueue::new();
        let late = queue.schedule(TransitionKind::RevealAnswers, t0() + Duration::seconds(5));
        let early = queue.schedule(TransitionKind::ClearFeedback, t0() + Duration::seconds(1));

        let fired: Vec<_> = queue
            .take_due(t0() + Duration::seconds(10))
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(fired, vec![early, late]);
    }

    #[test]
    fn test_cancel() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule(TransitionKind::ClearFeedback, t0());
        queue.schedule(TransitionKind::ClearFeedback, t0());
        queue.schedule(TransitionKind::RevealAnswers, t0());

        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
        assert_eq!(queue.cancel_kind(TransitionKind::ClearFeedback), 1);
        assert!(queue.is_pending(TransitionKind::RevealAnswers));
        assert_eq!(queue.next_due(), Some(t0()));

        queue.cancel_all();
        assert!(queue.take_due(t0()).is_empty());
    }
}
