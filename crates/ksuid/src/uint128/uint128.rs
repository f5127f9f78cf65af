use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use crate::{Error, Result, add_with_carry, sub_with_borrow};

/// A fixed-width 128-bit unsigned integer made of two 64-bit words.
///
/// The value is `high * 2^64 + low`. All arithmetic wraps modulo 2^128 and
/// never panics: callers detect overflow by comparing the result against
/// [`Uint128::ZERO`] or [`Uint128::MAX`]. This is what KSUID stepping relies on
/// to carry into (or borrow from) the timestamp.
///
/// The byte representation is always exactly 16 bytes, big-endian, high word
/// first, regardless of the magnitude of the value.
///
/// # Example
///
/// ```
/// use ksuid::Uint128;
///
/// let x = Uint128::from_words(0, u64::MAX);
/// let y = x.increment();
/// assert_eq!(y, Uint128::from_words(1, 0));
/// assert_eq!(y.decrement(), x);
///
/// assert_eq!(Uint128::MAX.increment(), Uint128::ZERO);
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Uint128 {
    high: u64,
    low: u64,
}

impl Uint128 {
    /// Width of the big-endian byte representation.
    pub const BYTES: usize = 16;

    /// The value `0`.
    pub const ZERO: Self = Self::from_words(0, 0);
    /// The value `1`.
    pub const ONE: Self = Self::from_words(0, 1);
    /// The value `2^128 - 1`, all bits set.
    pub const MAX: Self = Self::from_words(u64::MAX, u64::MAX);

    /// Builds a value from its high and low 64-bit words.
    #[must_use]
    pub const fn from_words(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    /// The most significant 64 bits.
    #[must_use]
    pub const fn high(&self) -> u64 {
        self.high
    }

    /// The least significant 64 bits.
    #[must_use]
    pub const fn low(&self) -> u64 {
        self.low
    }

    /// Interprets 16 bytes as a big-endian integer: the first 8 bytes form the
    /// high word, the last 8 the low word.
    #[must_use]
    pub const fn from_be_bytes(bytes: [u8; Self::BYTES]) -> Self {
        let mut high = 0_u64;
        let mut low = 0_u64;
        let mut i = 0;
        while i < 8 {
            high = (high << 8) | bytes[i] as u64;
            low = (low << 8) | bytes[i + 8] as u64;
            i += 1;
        }
        Self { high, low }
    }

    /// Like [`Self::from_be_bytes`], but from a slice that must be exactly
    /// [`Self::BYTES`] long.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] for any other slice length.
    pub fn try_from_be_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; Self::BYTES] = bytes.try_into().map_err(|_| Error::InvalidLength {
            len: bytes.len(),
            expected: Self::BYTES,
        })?;
        Ok(Self::from_be_bytes(bytes))
    }

    /// Returns the 16-byte big-endian representation.
    #[must_use]
    pub const fn to_be_bytes(&self) -> [u8; Self::BYTES] {
        let high = self.high.to_be_bytes();
        let low = self.low.to_be_bytes();
        let mut out = [0_u8; Self::BYTES];
        let mut i = 0;
        while i < 8 {
            out[i] = high[i];
            out[i + 8] = low[i];
            i += 1;
        }
        out
    }

    /// Wrapping (modular) addition, propagating the carry from the low word
    /// into the high word.
    #[must_use]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        let (low, carry) = add_with_carry(self.low, rhs.low, 0);
        let (high, _) = add_with_carry(self.high, rhs.high, carry);
        Self { high, low }
    }

    /// Wrapping (modular) subtraction, propagating the borrow from the low
    /// word into the high word.
    #[must_use]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        let (low, borrow) = sub_with_borrow(self.low, rhs.low, 0);
        let (high, _) = sub_with_borrow(self.high, rhs.high, borrow);
        Self { high, low }
    }

    /// Returns `self + 1`, wrapping [`Self::MAX`] to [`Self::ZERO`].
    #[must_use]
    pub const fn increment(self) -> Self {
        self.wrapping_add(Self::ONE)
    }

    /// Returns `self - 1`, wrapping [`Self::ZERO`] to [`Self::MAX`].
    #[must_use]
    pub const fn decrement(self) -> Self {
        self.wrapping_sub(Self::ONE)
    }

    /// Total order, lexicographic on `(high, low)`.
    #[must_use]
    pub const fn compare(&self, other: &Self) -> Ordering {
        if self.high < other.high {
            Ordering::Less
        } else if self.high > other.high {
            Ordering::Greater
        } else if self.low < other.low {
            Ordering::Less
        } else if self.low > other.low {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Whether every bit is clear.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        matches!(self.compare(&Self::ZERO), Ordering::Equal)
    }

    /// Whether every bit is set.
    #[must_use]
    pub const fn is_max(&self) -> bool {
        matches!(self.compare(&Self::MAX), Ordering::Equal)
    }
}

impl Ord for Uint128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Uint128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Uint128 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl AddAssign for Uint128 {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.wrapping_add(rhs);
    }
}

impl Sub for Uint128 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

impl SubAssign for Uint128 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.wrapping_sub(rhs);
    }
}

impl From<u128> for Uint128 {
    fn from(value: u128) -> Self {
        Self::from_words((value >> 64) as u64, value as u64)
    }
}

impl From<Uint128> for u128 {
    fn from(value: Uint128) -> Self {
        (u128::from(value.high) << 64) | u128::from(value.low)
    }
}

impl From<u64> for Uint128 {
    fn from(value: u64) -> Self {
        Self::from_words(0, value)
    }
}

impl From<[u8; Uint128::BYTES]> for Uint128 {
    fn from(bytes: [u8; Uint128::BYTES]) -> Self {
        Self::from_be_bytes(bytes)
    }
}

impl From<Uint128> for [u8; Uint128::BYTES] {
    fn from(value: Uint128) -> Self {
        value.to_be_bytes()
    }
}

impl TryFrom<&[u8]> for Uint128 {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::try_from_be_slice(bytes)
    }
}

impl fmt::Display for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&u128::from(*self), f)
    }
}

impl fmt::LowerHex for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&u128::from(*self), f)
    }
}

impl fmt::UpperHex for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&u128::from(*self), f)
    }
}

impl fmt::Debug for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uint128")
            .field("high", &format_args!("{:#018x}", self.high))
            .field("low", &format_args!("{:#018x}", self.low))
            .finish()
    }
}
