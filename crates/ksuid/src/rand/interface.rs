/// A trait for random sources that return random values.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests.
///
/// The random type `T` is generic. KSUID payloads are drawn as
/// [`crate::Uint128`], but `u64`, `u128` and `[u8; 16]` sources are common.
///
/// # Example
/// ```
/// use ksuid::{RandSource, Uint128};
///
/// struct FixedRand;
/// impl RandSource<Uint128> for FixedRand {
///     fn rand(&self) -> Uint128 {
///         Uint128::from_words(1, 2)
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand(), Uint128::from_words(1, 2));
/// ```
pub trait RandSource<T> {
    /// Returns a random value.
    fn rand(&self) -> T;
}

impl<T, R: RandSource<T> + ?Sized> RandSource<T> for &R {
    fn rand(&self) -> T {
        (**self).rand()
    }
}
