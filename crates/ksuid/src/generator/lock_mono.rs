use alloc::sync::Arc;
use core::cmp::Ordering;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Config, IdGenStatus, Ksuid, KsuidGenerator, RandSource, Result, TimeSource, Uint128,
    generator::Mutex,
};

/// A lock-based *monotonic* KSUID generator suitable for multi-threaded
/// environments.
///
/// This generator wraps the last issued KSUID in an [`Arc<Mutex<_>>`], allowing
/// safe shared use across threads. Clones share that state.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Probabilistically unique (no coordination required)
/// - ✅ Time-ordered (monotonically increasing per second)
///
/// ## See Also
/// - [`BasicKsuidGenerator`]
/// - [`BasicMonoKsuidGenerator`]
///
/// [`BasicKsuidGenerator`]: crate::BasicKsuidGenerator
/// [`BasicMonoKsuidGenerator`]: crate::BasicMonoKsuidGenerator
pub struct LockMonoKsuidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource<Uint128>,
{
    config: Config,
    #[cfg(feature = "cache-padded")]
    state: Arc<crossbeam_utils::CachePadded<Mutex<Option<Ksuid>>>>,
    #[cfg(not(feature = "cache-padded"))]
    state: Arc<Mutex<Option<Ksuid>>>,
    time: T,
    rng: R,
}

impl<T, R> Clone for LockMonoKsuidGenerator<T, R>
where
    T: TimeSource + Clone,
    R: RandSource<Uint128> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            state: Arc::clone(&self.state),
            time: self.time.clone(),
            rng: self.rng.clone(),
        }
    }
}

impl<T, R> LockMonoKsuidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource<Uint128>,
{
    /// Creates a new [`LockMonoKsuidGenerator`] with the provided time source
    /// and RNG under the default epoch.
    ///
    /// # Example
    /// ```
    /// use ksuid::{KsuidGenerator, LockMonoKsuidGenerator, MonotonicClock, ThreadRandom};
    ///
    /// let generator = LockMonoKsuidGenerator::new(MonotonicClock::default(), ThreadRandom);
    ///
    /// let id = generator
    ///     .try_next_id(|secs| std::thread::sleep(std::time::Duration::from_secs(secs)))
    ///     .unwrap();
    /// assert!(!id.is_nil());
    /// ```
    pub fn new(time: T, rng: R) -> Self {
        Self::from_state(None, time, rng)
    }

    /// Creates a new generator whose last issued ID is `(timestamp, payload)`.
    ///
    /// Useful for restoring state from persistent storage. The next ID within
    /// the same second will be the successor of this one.
    pub fn from_components(timestamp: u32, payload: Uint128, time: T, rng: R) -> Self {
        Self::from_state(Some(Ksuid::from_components(timestamp, payload)), time, rng)
    }

    fn from_state(last: Option<Ksuid>, time: T, rng: R) -> Self {
        Self {
            config: Config::new(),
            #[cfg(feature = "cache-padded")]
            state: Arc::new(crossbeam_utils::CachePadded::new(Mutex::new(last))),
            #[cfg(not(feature = "cache-padded"))]
            state: Arc::new(Mutex::new(last)),
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
    /// - [`crate::Error::TimestampOutOfRange`] if the clock cannot be encoded
    ///   under the configured epoch.
    /// - [`crate::Error::LockPoisoned`] if another thread panicked while
    ///   holding the lock (not with `parking-lot`).
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_gen_id(&self) -> Result<IdGenStatus> {
        let now = self
            .config
            .timestamp_from_unix_secs(self.time.current_secs())?;

        #[cfg(feature = "parking-lot")]
        let mut state = self.state.lock();
        #[cfg(not(feature = "parking-lot"))]
        let mut state = self.state.lock()?;

        // Nothing issued yet: always start from a random payload
        let Some(last) = *state else {
            let id = Ksuid::from_components(now, self.rng.rand());
            *state = Some(id);
            return Ok(IdGenStatus::Ready { id });
        };
        let current_ts = last.timestamp();

        match now.cmp(&current_ts) {
            Ordering::Equal => {
                if last.payload().is_max() {
                    Ok(IdGenStatus::Pending { yield_for: 1 })
                } else {
                    let id = last.next();
                    *state = Some(id);
                    Ok(IdGenStatus::Ready { id })
                }
            }
            Ordering::Greater => {
                let id = Ksuid::from_components(now, self.rng.rand());
                *state = Some(id);
                Ok(IdGenStatus::Ready { id })
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

impl<T, R> KsuidGenerator<T, R> for LockMonoKsuidGenerator<T, R>
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
