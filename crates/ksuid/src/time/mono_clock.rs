use core::time::Duration;

use crate::time::{Instant, SystemTime, TimeSource, UNIX_EPOCH};

/// A monotonic time source anchored to the wall clock once, at construction.
///
/// Each reading is the anchor plus the [`Instant`] time elapsed since
/// construction, so it never goes backward even if the system clock is
/// adjusted externally. Clones share the same anchor.
///
/// # Example
///
/// ```
/// use ksuid::{MonotonicClock, TimeSource};
///
/// let clock = MonotonicClock::default();
/// let a = clock.current_secs();
/// let b = clock.current_secs();
/// assert!(b >= a);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct MonotonicClock {
    anchor: Duration,
    start: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    /// Anchors a new clock to the current wall-clock time.
    #[must_use]
    pub fn new() -> Self {
        let anchor = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO);
        Self::with_anchor(anchor)
    }

    /// Anchors a new clock to an explicit time since the Unix epoch.
    ///
    /// Useful for replaying or testing at a fixed origin while still
    /// advancing in real time.
    #[must_use]
    pub fn with_anchor(anchor: Duration) -> Self {
        Self {
            anchor,
            start: Instant::now(),
        }
    }
}

impl TimeSource for MonotonicClock {
    fn current_secs(&self) -> u64 {
        (self.anchor + self.start.elapsed()).as_secs()
    }
}
