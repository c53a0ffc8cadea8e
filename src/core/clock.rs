//! Wall-clock abstraction for the daily gate and timers.
//!
//! The engine never reads the system time directly. It asks a `Clock` for
//! the player's local time, so tests can pin the date and step through
//! timer delays deterministically.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

/// Source of the player's local wall-clock time.
pub trait Clock {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar day.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Clock backed by the operating system's local time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Settable clock. Clones share the same time, so a test can keep one
/// handle while the engine owns another.
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Rc<Cell<NaiveDateTime>>,
}

impl ManualClock {
    /// Create a clock frozen at `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    /// Jump to an absolute time.
    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    /// Move forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

/// Whether two instants fall on the same local calendar day.
#[must_use]
pub fn same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Time remaining until the next local midnight.
#[must_use]
pub fn until_next_midnight(now: NaiveDateTime) -> Duration {
    match now.date().succ_opt().and_then(|d| d.and_hms_opt(0, 0, 0)) {
        Some(midnight) => midnight - now,
        None => Duration::zero(),
    }
}

/// Render a countdown as zero-padded `HH:MM`.
///
/// ```
/// use chrono::Duration;
/// use mashup::core::clock::format_countdown;
///
/// assert_eq!(format_countdown(Duration::minutes(125)), "02:05");
/// ```
#[must_use]
pub fn format_countdown(remaining: Duration) -> String {
    let minutes = remaining.num_minutes().max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
