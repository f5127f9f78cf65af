use core::{cell::Cell, cmp::Ordering};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Config, IdGenStatus, Ksuid, KsuidGenerator, RandSource, Result, TimeSource, Uint128};

/// A *monotonic* KSUID generator suitable for single-threaded environments.
///
/// This generator is lightweight and fast, but is not thread-safe.
///
/// Within one second, each ID is the successor of the previous one. A new
/// second starts from a fresh random payload.
///
/// ## Features
/// - ❌ Not thread-safe
/// - ✅ Probabilistically unique (no coordination required)
/// - ✅ Time-ordered (monotonically increasing per second)
///
/// ## See Also
/// - [`BasicKsuidGenerator`]
/// - [`LockMonoKsuidGenerator`]
///
/// [`BasicKsuidGenerator`]: crate::BasicKsuidGenerator
/// [`LockMonoKsuidGenerator`]: crate::LockMonoKsuidGenerator
pub struct BasicMonoKsuidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource<Uint128>,
{
    config: Config,
    state: Cell<Option<Ksuid>>,
    time: T,
    rng: R,
}

impl<T, R> BasicMonoKsuidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource<Uint128>,
{
    /// Creates a new [`BasicMonoKsuidGenerator`] with the provided time source
    /// and RNG under the default epoch.
    ///
    /// # Example
    /// ```
    /// use ksuid::{BasicMonoKsuidGenerator, IdGenStatus, MonotonicClock, ThreadRandom};
    ///
    /// let generator = BasicMonoKsuidGenerator::new(MonotonicClock::default(), ThreadRandom);
    ///
    /// let id = loop {
    ///     match generator.try_gen_id().unwrap() {
    ///         IdGenStatus::Ready { id } => break id,
    ///         IdGenStatus::Pending { .. } => std::thread::yield_now(),
    ///     }
    /// };
    /// assert!(!id.is_nil());
    /// ```
    pub fn new(time: T, rng: R) -> Self {
        Self {
            config: Config::new(),
            state: Cell::new(None),
            time,
            rng,
        }
    }

    /// Creates a new generator whose last issued ID is `(timestamp, payload)`.
    ///
    /// Useful for restoring state from persistent storage. The next ID within
    /// the same second will be the successor of this one.
    pub fn from_components(timestamp: u32, payload: Uint128, time: T, rng: R) -> Self {
        Self {
            config: Config::new(),
            state: Cell::new(Some(Ksuid::from_components(timestamp, payload))),
            time,
            rng,
        }
    }

    /// Replaces the epoch configuration.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Attempts to generate a new KSUID.
    ///
    /// # Returns
    /// - `Ok(IdGenStatus::Ready { id })`: A new ID is available
    /// - `Ok(IdGenStatus::Pending { yield_for })`: The time to wait (in
    ///   seconds) before trying again
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TimestampOutOfRange`] if the clock cannot be
    /// encoded under the configured epoch.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_gen_id(&self) -> Result<IdGenStatus> {
        let now = self
            .config
            .timestamp_from_unix_secs(self.time.current_secs())?;
        // Nothing issued yet: always start from a random payload
        let Some(state) = self.state.get() else {
            let updated = Ksuid::from_components(now, self.rng.rand());
            self.state.set(Some(updated));
            return Ok(IdGenStatus::Ready { id: updated });
        };
        let current_ts = state.timestamp();

        match now.cmp(&current_ts) {
            Ordering::Equal => {
                if state.payload().is_max() {
                    Ok(IdGenStatus::Pending { yield_for: 1 })
                } else {
                    let updated = state.next();
                    self.state.set(Some(updated));
                    Ok(IdGenStatus::Ready { id: updated })
                }
            }
            Ordering::Greater => {
                let updated = Ksuid::from_components(now, self.rng.rand());
                self.state.set(Some(updated));
                Ok(IdGenStatus::Ready { id: updated })
            }
            Ordering::Less => Ok(Self::cold_clock_behind(now, current_ts)),
        }
    }

    #[cold]
    #[inline(never)]
    fn cold_clock_behind(now: u32, current_ts: u32) -> IdGenStatus {
        IdGenStatus::Pending {
            yield_for: u64::from(current_ts - now),
        }
    }
}

impl<T, R> KsuidGenerator<T, R> for BasicMonoKsuidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource<Uint128>,
{
    fn new(time: T, rng: R) -> Self {
        Self::new(time, rng)
    }

    fn try_gen_id(&self) -> Result<IdGenStatus> {
        self.try_gen_id()
    }
}
