use crate::time::{SystemTime, TimeSource, UNIX_EPOCH};

/// A [`TimeSource`] backed by the system wall clock.
///
/// Every call performs a clock query. The wall clock may jump backwards (NTP,
/// manual changes); use [`crate::MonotonicClock`] when that matters.
///
/// A clock set before 1970 reads as `0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs())
    }
}
