//! Observer registry.
//!
//! UI layers subscribe to the engine instead of polling it. Observers are
//! called synchronously, in subscription order, after the state change
//! they describe has been applied.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::event::PuzzleEvent;

/// Handle returned by `ObserverRegistry::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

/// Receives puzzle events.
pub trait PuzzleObserver {
    /// Called once per accepted transition.
    fn on_event(&mut self, event: &PuzzleEvent);
}

impl<F: FnMut(&PuzzleEvent)> PuzzleObserver for F {
    fn on_event(&mut self, event: &PuzzleEvent) {
        self(event)
    }
}

/// Ordered set of observers.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<(ObserverId, Box<dyn PuzzleObserver>)>,
    next_id: u32,
}

impl ObserverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer.
    pub fn subscribe(&mut self, observer: impl PuzzleObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Deliver an event to every observer.
    pub fn emit(&mut self, event: &PuzzleEvent) {
        for (_, observer) in &mut self.observers {
            observer.on_event(event);
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

/// Observer that records every event. Clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<PuzzleEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<PuzzleEvent> {
        self.events.borrow().clone()
    }

    /// Drop all recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl PuzzleObserver for EventLog {
    fn on_event(&mut self, event: &PuzzleEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
