use crate::{Config, Ksuid, KsuidFormatter, KsuidParts, RandSource, Result, TimeSource, Uint128};

/// String-level KSUID operations bound to an explicit [`Config`].
///
/// The codec itself works on raw seconds since the configured epoch; the epoch
/// only comes into play where Unix time crosses the boundary (clock readings,
/// [`KsuidParts`], and the `unix_secs` conversions).
///
/// # Example
///
/// ```
/// use ksuid::{KsuidCodec, Uint128};
///
/// let codec = KsuidCodec::default();
/// assert_eq!(
///     codec.generate(1, Uint128::ZERO),
///     "000007n42DGM5Tflk9n8mt7Fhc8"
/// );
/// assert_eq!(
///     codec.prev("000007n42DGM5Tflk9n8mt7Fhc8").unwrap(),
///     "000007n42DGM5Tflk9n8mt7Fhc7"
/// );
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KsuidCodec {
    config: Config,
}

impl KsuidCodec {
    /// Creates a codec bound to `config`.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// The epoch configuration used for timestamp conversions.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Encodes a raw timestamp and payload as the 27-character text form.
    #[must_use]
    pub fn generate(&self, timestamp: u32, payload: Uint128) -> KsuidFormatter {
        Ksuid::from_components(timestamp, payload).encode()
    }

    /// Parses the 27-character text form.
    ///
    /// # Errors
    ///
    /// See [`Ksuid::decode`].
    pub fn parse(&self, s: impl AsRef<str>) -> Result<Ksuid> {
        Ksuid::decode(s)
    }

    /// Parses `s` and encodes its successor.
    ///
    /// # Errors
    ///
    /// See [`Ksuid::decode`].
    pub fn next(&self, s: impl AsRef<str>) -> Result<KsuidFormatter> {
        Ok(self.parse(s)?.next().encode())
    }

    /// Parses `s` and encodes its predecessor.
    ///
    /// # Errors
    ///
    /// See [`Ksuid::decode`].
    pub fn prev(&self, s: impl AsRef<str>) -> Result<KsuidFormatter> {
        Ok(self.parse(s)?.prev().encode())
    }

    /// Builds a KSUID from a Unix-seconds clock reading and a random payload.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TimestampOutOfRange`] if the clock reads before
    /// the epoch or past `epoch + u32::MAX` seconds.
    pub fn now<T, R>(&self, time: &T, rng: &R) -> Result<Ksuid>
    where
        T: TimeSource,
        R: RandSource<Uint128>,
    {
        self.from_unix_secs(time.current_secs(), rng.rand())
    }

    /// Builds a KSUID from Unix seconds under this codec's epoch.
    ///
    /// # Errors
    ///
    /// See [`Config::timestamp_from_unix_secs`].
    pub fn from_unix_secs(&self, unix_secs: u64, payload: Uint128) -> Result<Ksuid> {
        let timestamp = self.config.timestamp_from_unix_secs(unix_secs)?;
        Ok(Ksuid::from_components(timestamp, payload))
    }

    /// The timestamp of `id` as Unix seconds under this codec's epoch.
    #[must_use]
    pub const fn unix_secs(&self, id: &Ksuid) -> u64 {
        self.config.unix_secs_from_timestamp(id.timestamp())
    }

    /// See [`KsuidParts::from_ksuid`].
    #[must_use]
    pub fn to_parts(&self, id: &Ksuid) -> KsuidParts {
        KsuidParts::from_ksuid(id, &self.config)
    }

    /// See [`KsuidParts::to_ksuid`].
    ///
    /// # Errors
    ///
    /// See [`KsuidParts::to_ksuid`].
    pub fn from_parts(&self, parts: &KsuidParts) -> Result<Ksuid> {
        parts.to_ksuid(&self.config)
    }
}
