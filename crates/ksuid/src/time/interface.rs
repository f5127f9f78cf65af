use core::time::Duration;

/// KSUID epoch: Tuesday, May 13, 2014 16:53:20 UTC (Unix time 1,400,000,000)
pub const KSUID_EPOCH: Duration = Duration::from_secs(1_400_000_000);

/// A trait for time sources that return the current wall-clock time.
///
/// This abstraction allows you to plug in a real system clock, a monotonic
/// timer, or a mocked time source in tests.
///
/// The unit is **seconds since the Unix epoch**. The configured KSUID epoch is
/// subtracted later by [`crate::Config`], never by the clock.
///
/// # Example
///
/// ```
/// use ksuid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_secs(&self) -> u64 {
///         1_507_608_047
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_secs(), 1_507_608_047);
/// ```
pub trait TimeSource {
    /// Returns the current time in seconds since the Unix epoch.
    fn current_secs(&self) -> u64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_secs(&self) -> u64 {
        (**self).current_secs()
    }
}
