use core::time::Duration;

use crate::{Error, KSUID_EPOCH, Result};

/// Runtime configuration for encoding and interpreting KSUID timestamps.
///
/// The timestamp field of a [`crate::Ksuid`] counts seconds since `epoch`,
/// which is itself an offset from the Unix epoch. Values minted under one
/// epoch are only meaningful when read back under the same epoch.
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use ksuid::{Config, KSUID_EPOCH};
///
/// assert_eq!(Config::default().epoch, KSUID_EPOCH);
///
/// let config = Config::with_epoch(Duration::from_secs(1_600_000_000));
/// assert_eq!(config.timestamp_from_unix_secs(1_600_000_042), Ok(42));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Config {
    /// Offset from the Unix epoch that timestamp `0` denotes.
    pub epoch: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Configuration using the standard [`KSUID_EPOCH`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_epoch(KSUID_EPOCH)
    }

    /// Configuration using a custom epoch.
    #[must_use]
    pub const fn with_epoch(epoch: Duration) -> Self {
        Self { epoch }
    }

    /// The epoch in whole seconds since the Unix epoch.
    #[must_use]
    pub const fn epoch_secs(&self) -> u64 {
        self.epoch.as_secs()
    }

    /// Converts Unix seconds into a KSUID timestamp under this epoch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOutOfRange`] if `unix_secs` precedes the
    /// epoch or lies more than `u32::MAX` seconds after it.
    pub fn timestamp_from_unix_secs(&self, unix_secs: u64) -> Result<u32> {
        unix_secs
            .checked_sub(self.epoch_secs())
            .and_then(|offset| u32::try_from(offset).ok())
            .ok_or(Error::TimestampOutOfRange { unix_secs })
    }

    /// Converts a KSUID timestamp back into Unix seconds under this epoch.
    #[must_use]
    pub const fn unix_secs_from_timestamp(&self, timestamp: u32) -> u64 {
        self.epoch_secs().saturating_add(timestamp as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_epoch() {
        let config = Config::default();
        assert_eq!(config.epoch_secs(), 1_400_000_000);
        assert_eq!(config.timestamp_from_unix_secs(1_507_608_047), Ok(107_608_047));
        assert_eq!(config.unix_secs_from_timestamp(107_608_047), 1_507_608_047);
    }

    #[test]
    fn range_bounds() {
        let config = Config::default();
        assert_eq!(config.timestamp_from_unix_secs(1_400_000_000), Ok(0));
        assert_eq!(
            config.timestamp_from_unix_secs(1_400_000_000 + u64::from(u32::MAX)),
            Ok(u32::MAX)
        );
        assert_eq!(
            config.timestamp_from_unix_secs(1_399_999_999),
            Err(Error::TimestampOutOfRange {
                unix_secs: 1_399_999_999
            })
        );
        let past_end = 1_400_000_000 + u64::from(u32::MAX) + 1;
        assert_eq!(
            config.timestamp_from_unix_secs(past_end),
            Err(Error::TimestampOutOfRange {
                unix_secs: past_end
            })
        );
    }

    #[test]
    fn custom_epoch() {
        let config = Config::with_epoch(Duration::ZERO);
        assert_eq!(config.timestamp_from_unix_secs(5), Ok(5));
        assert_eq!(config.unix_secs_from_timestamp(u32::MAX), u64::from(u32::MAX));

        // Sub-second epoch precision is dropped
        let config = Config::with_epoch(Duration::from_millis(10_999));
        assert_eq!(config.epoch_secs(), 10);
    }
}
