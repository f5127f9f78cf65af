use crate::{IdGenStatus, Ksuid, RandSource, Result, TimeSource, Uint128};

/// A minimal interface for generating KSUIDs.
pub trait KsuidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource<Uint128>,
{
    /// Creates a new generator under the default epoch.
    fn new(time: T, rng: R) -> Self;

    /// Attempts a single generation step.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::TimestampOutOfRange`] if the clock cannot be encoded
    ///   under the generator's epoch.
    /// - [`crate::Error::LockPoisoned`] for lock-based generators whose lock
    ///   was poisoned.
    fn try_gen_id(&self) -> Result<IdGenStatus>;

    /// Generates the next ID, calling `f` with the number of seconds to back
    /// off each time the generator reports [`IdGenStatus::Pending`].
    ///
    /// `f` decides how to wait (sleep, yield, spin); nothing blocks here.
    ///
    /// # Errors
    ///
    /// See [`Self::try_gen_id`].
    fn try_next_id(&self, mut f: impl FnMut(u64)) -> Result<Ksuid> {
        loop {
            match self.try_gen_id()? {
                IdGenStatus::Ready { id } => break Ok(id),
                IdGenStatus::Pending { yield_for } => f(yield_for),
            }
        }
    }
}
