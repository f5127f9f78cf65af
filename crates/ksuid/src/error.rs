use core::fmt;

use crate::{Base62Error, HexError};

/// A result type defaulting to the crate-wide [`enum@Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `ksuid` can emit.
///
/// Every error is a pure data-validation failure detected synchronously at the
/// point of the operation. Nothing is retried internally.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// Base62 encoding or decoding failed.
    ///
    /// Returned when parsing a KSUID string of the wrong length or with a
    /// character outside `0-9A-Za-z`, or when a decoded value does not fit the
    /// 20-byte layout.
    Base62Error(Base62Error),

    /// A hex payload in a [`crate::KsuidParts`] record was malformed.
    HexError(HexError),

    /// A raw byte buffer did not have the fixed width required at that stage.
    InvalidLength {
        /// Length of the provided buffer.
        len: usize,
        /// Length the operation requires.
        expected: usize,
    },

    /// A Unix timestamp cannot be represented as a 32-bit offset from the
    /// configured epoch (it precedes the epoch or lies more than `u32::MAX`
    /// seconds after it).
    TimestampOutOfRange {
        /// The offending Unix timestamp, in seconds.
        unix_secs: u64,
    },

    /// The generator's lock was **poisoned**.
    ///
    /// This occurs when a thread panics while holding the lock. When the
    /// `parking-lot` feature is enabled, mutexes do **not** poison, so this
    /// variant is not available.
    #[cfg_attr(docsrs, doc(cfg(all(feature = "lock", not(feature = "parking-lot")))))]
    #[cfg(all(feature = "lock", not(feature = "parking-lot")))]
    LockPoisoned,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base62Error(err) => write!(f, "base62: {err}"),
            Self::HexError(err) => write!(f, "hex: {err}"),
            Self::InvalidLength { len, expected } => {
                write!(f, "invalid length: {len} (expected {expected} bytes)")
            }
            Self::TimestampOutOfRange { unix_secs } => {
                write!(f, "timestamp out of range: {unix_secs}")
            }
            #[cfg(all(feature = "lock", not(feature = "parking-lot")))]
            Self::LockPoisoned => f.write_str("lock poisoned"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Base62Error(err) => Some(err),
            Self::HexError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Base62Error> for Error {
    fn from(err: Base62Error) -> Self {
        Self::Base62Error(err)
    }
}

impl From<HexError> for Error {
    fn from(err: HexError) -> Self {
        Self::HexError(err)
    }
}

#[cfg_attr(docsrs, doc(cfg(all(feature = "lock", not(feature = "parking-lot")))))]
#[cfg(all(feature = "lock", not(feature = "parking-lot")))]
use crate::generator::{MutexGuard, PoisonError};
#[cfg_attr(docsrs, doc(cfg(all(feature = "lock", not(feature = "parking-lot")))))]
#[cfg(all(feature = "lock", not(feature = "parking-lot")))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
