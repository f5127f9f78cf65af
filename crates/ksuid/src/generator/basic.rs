#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Config, IdGenStatus, Ksuid, KsuidGenerator, RandSource, Result, TimeSource, Uint128};

/// A *non-monotonic* KSUID generator suitable for multi-threaded environments.
///
/// Every call reads the clock and draws a fresh payload; no state is kept, so
/// it is as thread-safe as its sources. IDs from the same second are in random
/// order relative to each other.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Probabilistically unique (no coordination required)
/// - ✅ Time-ordered (not monotonically increasing, random per second)
///
/// ## See Also
/// - [`BasicMonoKsuidGenerator`]
/// - [`LockMonoKsuidGenerator`]
///
/// [`BasicMonoKsuidGenerator`]: crate::BasicMonoKsuidGenerator
/// [`LockMonoKsuidGenerator`]: crate::LockMonoKsuidGenerator
#[derive(Clone, Debug)]
pub struct BasicKsuidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource<Uint128>,
{
    config: Config,
    time: T,
    rng: R,
}

impl<T, R> BasicKsuidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource<Uint128>,
{
    /// Creates a new [`BasicKsuidGenerator`] with the provided time source and
    /// RNG under the default epoch.
    ///
    /// # Example
    /// ```
    /// use ksuid::{BasicKsuidGenerator, KsuidGenerator, SystemClock, ThreadRandom};
    ///
    /// let generator = BasicKsuidGenerator::new(SystemClock, ThreadRandom);
    /// let id = generator.try_next_id(|_| std::thread::yield_now()).unwrap();
    /// assert!(!id.is_nil());
    /// ```
    pub const fn new(time: T, rng: R) -> Self {
        Self {
            config: Config::new(),
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

    /// Generates a KSUID from the current clock reading and a fresh payload.
    ///
    /// Always returns [`IdGenStatus::Ready`] on success.
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
        Ok(IdGenStatus::Ready {
            id: Ksuid::from_components(now, self.rng.rand()),
        })
    }
}

impl<T, R> KsuidGenerator<T, R> for BasicKsuidGenerator<T, R>
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
