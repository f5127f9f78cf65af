use crate::Ksuid;

/// Represents the result of attempting to generate a new KSUID.
///
/// - [`IdGenStatus::Ready`] indicates a new ID was successfully generated.
/// - [`IdGenStatus::Pending`] means a monotonic generator cannot produce a
///   larger ID until the clock advances, either because the payload is
///   saturated for the current second or because the clock moved backwards.
///
/// This allows non-blocking generation loops and clean backoff strategies.
///
/// # Example
///
/// ```
/// use ksuid::{BasicMonoKsuidGenerator, IdGenStatus, RandSource, TimeSource, Uint128};
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_secs(&self) -> u64 {
///         1_500_000_000
///     }
/// }
///
/// struct MaxRand;
/// impl RandSource<Uint128> for MaxRand {
///     fn rand(&self) -> Uint128 {
///         Uint128::MAX
///     }
/// }
///
/// let generator = BasicMonoKsuidGenerator::new(FixedTime, MaxRand);
/// assert!(matches!(generator.try_gen_id(), Ok(IdGenStatus::Ready { .. })));
/// assert_eq!(
///     generator.try_gen_id(),
///     Ok(IdGenStatus::Pending { yield_for: 1 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdGenStatus {
    /// A unique ID was generated and is ready to use.
    Ready {
        /// The generated KSUID.
        id: Ksuid,
    },
    /// No ID could be generated for the current second.
    Pending {
        /// Seconds to wait before trying again.
        yield_for: u64,
    },
}
