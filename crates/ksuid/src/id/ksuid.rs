use core::{fmt, str::FromStr};

use crate::{
    Base62Error, Config, Error, KsuidFormatter, KsuidFormatterRef, RandSource, Result, Uint128,
    decode_base62, encode_base62,
};

/// Width of the timestamp field, in bytes.
pub const TIMESTAMP_BYTES: usize = 4;
/// Width of the payload field, in bytes.
pub const PAYLOAD_BYTES: usize = 16;
/// Width of the binary form, in bytes.
pub const TOTAL_BYTES: usize = TIMESTAMP_BYTES + PAYLOAD_BYTES;
/// Width of the canonical base62 text form, in characters.
pub const ENCODED_LENGTH: usize = 27;

/// A K-Sortable Unique Identifier.
///
/// ```text
///  Byte Index:  0          3 4                   19
///               +-----------+---------------------+
///  Field:       | timestamp |       payload       |
///               |  (32 BE)  |      (128 BE)       |
///               +-----------+---------------------+
/// ```
///
/// The timestamp counts seconds since the configured epoch
/// ([`crate::KSUID_EPOCH`] by default). Ordering is by timestamp then
/// payload, which is also the byte order of the binary form and the
/// lexicographic order of the 27-character text form.
///
/// # Example
///
/// ```
/// use ksuid::{Ksuid, Uint128};
///
/// let id: Ksuid = "0ujtsYcgvSTl8PAuAdqWYSMnLOv".parse().unwrap();
/// assert_eq!(id.timestamp(), 107_608_047);
/// assert_eq!(id.unix_secs(), 1_507_608_047);
/// assert_eq!(id.next(), "0ujtsYcgvSTl8PAuAdqWYSMnLOw");
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ksuid {
    timestamp: u32,
    payload: Uint128,
}

impl Ksuid {
    /// The all-zero KSUID, `"000000000000000000000000000"`.
    pub const NIL: Self = Self::from_components(0, Uint128::ZERO);
    /// The all-`0xFF` KSUID, `"aWgEPTl1tmebfsQzFP4bxwgy80V"`.
    pub const MAX: Self = Self::from_components(u32::MAX, Uint128::MAX);

    /// Constructs a KSUID from a raw timestamp (seconds since the configured
    /// epoch) and payload.
    #[must_use]
    pub const fn from_components(timestamp: u32, payload: Uint128) -> Self {
        Self { timestamp, payload }
    }

    /// Seconds since the configured epoch.
    #[must_use]
    pub const fn timestamp(&self) -> u32 {
        self.timestamp
    }

    /// The 128-bit payload.
    #[must_use]
    pub const fn payload(&self) -> Uint128 {
        self.payload
    }

    /// Returns `true` for [`Ksuid::NIL`].
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.timestamp == 0 && self.payload.is_zero()
    }

    /// The 20-byte binary form: big-endian timestamp followed by big-endian
    /// payload.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; TOTAL_BYTES] {
        let ts = self.timestamp.to_be_bytes();
        let payload = self.payload.to_be_bytes();
        let mut out = [0_u8; TOTAL_BYTES];
        let mut i = 0;
        while i < TIMESTAMP_BYTES {
            out[i] = ts[i];
            i += 1;
        }
        while i < TOTAL_BYTES {
            out[i] = payload[i - TIMESTAMP_BYTES];
            i += 1;
        }
        out
    }

    /// Inverse of [`Ksuid::to_bytes`]. Every 20-byte value is a valid KSUID.
    #[must_use]
    pub fn from_bytes(bytes: [u8; TOTAL_BYTES]) -> Self {
        let [a, b, c, d, rest @ ..] = bytes;
        Self::from_components(u32::from_be_bytes([a, b, c, d]), Uint128::from_be_bytes(rest))
    }

    /// Parses the binary form from a slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless `bytes` is exactly 20 bytes.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; TOTAL_BYTES] = bytes.try_into().map_err(|_| Error::InvalidLength {
            len: bytes.len(),
            expected: TOTAL_BYTES,
        })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Returns a stack-allocated buffer sized for [`Ksuid::encode_to_buf`].
    #[must_use]
    pub const fn buf() -> [u8; ENCODED_LENGTH] {
        [b'0'; ENCODED_LENGTH]
    }

    /// Returns a formatter holding the 27-character base62 text form.
    ///
    /// # Example
    ///
    /// ```
    /// use ksuid::Ksuid;
    ///
    /// assert_eq!(Ksuid::NIL.encode(), "000000000000000000000000000");
    /// assert_eq!(Ksuid::MAX.encode(), "aWgEPTl1tmebfsQzFP4bxwgy80V");
    /// ```
    #[must_use]
    pub fn encode(&self) -> KsuidFormatter {
        KsuidFormatter::new(self)
    }

    /// Encodes into a caller-provided buffer without heap allocation and
    /// returns a formatter view over it.
    ///
    /// # Example
    ///
    /// ```
    /// use ksuid::Ksuid;
    ///
    /// let mut buf = Ksuid::buf();
    /// let formatter = Ksuid::MAX.encode_to_buf(&mut buf);
    /// assert_eq!(formatter, "aWgEPTl1tmebfsQzFP4bxwgy80V");
    /// ```
    pub fn encode_to_buf<'buf>(
        &self,
        buf: &'buf mut [u8; ENCODED_LENGTH],
    ) -> KsuidFormatterRef<'buf> {
        KsuidFormatterRef::new(self, buf)
    }

    pub(crate) fn inner_encode_to_buf(&self, buf: &mut [u8; ENCODED_LENGTH]) {
        // 62^27 > 2^160, so any 20-byte value fits
        if let Err(err) = encode_base62(&self.to_bytes(), buf) {
            unreachable!("{err}");
        }
    }

    /// Decodes the 27-character base62 text form.
    ///
    /// # Errors
    ///
    /// - [`Base62Error::InvalidLength`] if `s` is not exactly 27 bytes.
    /// - [`Base62Error::InvalidCharacter`] on a byte outside `0-9A-Za-z`.
    /// - [`Base62Error::DecodingOverflow`] if the value exceeds 20 bytes, i.e.
    ///   `s` sorts above `"aWgEPTl1tmebfsQzFP4bxwgy80V"`.
    ///
    /// # Example
    ///
    /// ```
    /// use ksuid::{Base62Error, Error, Ksuid};
    ///
    /// assert_eq!(
    ///     Ksuid::decode("aWgEPTl1tmebfsQzFP4bxwgy80W"),
    ///     Err(Error::Base62Error(Base62Error::DecodingOverflow { width: 20 }))
    /// );
    /// ```
    pub fn decode(s: impl AsRef<str>) -> Result<Self> {
        let s = s.as_ref().as_bytes();
        if s.len() != ENCODED_LENGTH {
            return Err(Error::Base62Error(Base62Error::InvalidLength {
                len: s.len(),
                expected: ENCODED_LENGTH,
            }));
        }
        let mut bytes = [0_u8; TOTAL_BYTES];
        decode_base62(s, &mut bytes)?;
        Ok(Self::from_bytes(bytes))
    }

    /// The successor in `(timestamp, payload)` order.
    ///
    /// The payload is incremented; when it wraps to zero the timestamp is
    /// incremented. [`Ksuid::MAX`] wraps around to [`Ksuid::NIL`].
    #[must_use]
    pub const fn next(&self) -> Self {
        let payload = self.payload.increment();
        let timestamp = if payload.is_zero() {
            self.timestamp.wrapping_add(1)
        } else {
            self.timestamp
        };
        Self::from_components(timestamp, payload)
    }

    /// The predecessor in `(timestamp, payload)` order.
    ///
    /// The payload is decremented; when it wraps to all ones the timestamp is
    /// decremented. [`Ksuid::NIL`] wraps around to [`Ksuid::MAX`].
    #[must_use]
    pub const fn prev(&self) -> Self {
        let payload = self.payload.decrement();
        let timestamp = if payload.is_max() {
            self.timestamp.wrapping_sub(1)
        } else {
            self.timestamp
        };
        Self::from_components(timestamp, payload)
    }

    /// Builds a KSUID from Unix seconds under the default epoch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOutOfRange`] if `unix_secs` cannot be
    /// represented. See [`Config::timestamp_from_unix_secs`].
    pub fn from_unix_secs(unix_secs: u64, payload: Uint128) -> Result<Self> {
        Config::default()
            .timestamp_from_unix_secs(unix_secs)
            .map(|ts| Self::from_components(ts, payload))
    }

    /// Builds a KSUID from Unix seconds under the default epoch, drawing the
    /// payload from `rng`.
    ///
    /// # Errors
    ///
    /// See [`Ksuid::from_unix_secs`].
    pub fn from_unix_secs_and_rand<R>(unix_secs: u64, rng: &R) -> Result<Self>
    where
        R: RandSource<Uint128>,
    {
        Self::from_unix_secs(unix_secs, rng.rand())
    }

    /// The timestamp as Unix seconds under the default epoch.
    #[must_use]
    pub const fn unix_secs(&self) -> u64 {
        Config::new().unix_secs_from_timestamp(self.timestamp)
    }

    /// Generates a KSUID from the system clock and [`crate::ThreadRandom`]
    /// under the default epoch.
    ///
    /// Every call performs a clock query and draws a fresh payload, so
    /// successive calls within one second are not ordered. Use a monotonic
    /// generator such as [`crate::BasicMonoKsuidGenerator`] when that matters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TimestampOutOfRange`] if the system clock reads before
    /// the KSUID epoch.
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[cfg(feature = "std")]
    pub fn now() -> Result<Self> {
        use crate::{SystemClock, ThreadRandom, TimeSource};
        Self::from_unix_secs_and_rand(SystemClock.current_secs(), &ThreadRandom)
    }

    /// The timestamp as a [`std::time::SystemTime`] under the default epoch.
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[cfg(feature = "std")]
    #[must_use]
    pub fn datetime(&self) -> std::time::SystemTime {
        std::time::SystemTime::UNIX_EPOCH + core::time::Duration::from_secs(self.unix_secs())
    }
}

impl fmt::Display for Ksuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.encode().fmt(f)
    }
}

impl fmt::Debug for Ksuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ksuid")
            .field("id", &format_args!("{}", self.encode()))
            .field(
                "timestamp",
                &format_args!("{} (0x{:x})", self.timestamp, self.timestamp),
            )
            .field("payload", &format_args!("0x{:032x}", self.payload))
            .finish()
    }
}

impl FromStr for Ksuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl TryFrom<&str> for Ksuid {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl TryFrom<&[u8]> for Ksuid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::try_from_slice(bytes)
    }
}

impl From<[u8; TOTAL_BYTES]> for Ksuid {
    fn from(bytes: [u8; TOTAL_BYTES]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Ksuid> for [u8; TOTAL_BYTES] {
    fn from(id: Ksuid) -> Self {
        id.to_bytes()
    }
}

impl PartialEq<str> for Ksuid {
    fn eq(&self, other: &str) -> bool {
        Self::decode(other).is_ok_and(|id| id == *self)
    }
}

impl PartialEq<&str> for Ksuid {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<Ksuid> for &str {
    fn eq(&self, other: &Ksuid) -> bool {
        other == *self
    }
}

impl PartialEq<alloc::string::String> for Ksuid {
    fn eq(&self, other: &alloc::string::String) -> bool {
        self == other.as_str()
    }
}

impl From<Ksuid> for alloc::string::String {
    fn from(id: Ksuid) -> Self {
        id.encode().to_string()
    }
}

impl From<&Ksuid> for alloc::string::String {
    fn from(id: &Ksuid) -> Self {
        id.encode().to_string()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::String, vec::Vec};

    use super::*;

    const SAMPLE: &str = "0ujtsYcgvSTl8PAuAdqWYSMnLOv";
    const SAMPLE_BYTES: [u8; 20] = [
        0x06, 0x69, 0xF7, 0xEF, 0xB5, 0xA1, 0xCD, 0x34, 0xB5, 0xF9, 0x9D, 0x11, 0x54, 0xFB, 0x68,
        0x53, 0x34, 0x5C, 0x97, 0x35,
    ];

    struct MockRand;
    impl RandSource<Uint128> for MockRand {
        fn rand(&self) -> Uint128 {
            Uint128::from(42_u128)
        }
    }

    #[test]
    fn known_vector() {
        let id = Ksuid::from_bytes(SAMPLE_BYTES);
        assert_eq!(id.timestamp(), 107_608_047);
        assert_eq!(
            id.payload(),
            Uint128::from(0xB5A1_CD34_B5F9_9D11_54FB_6853_345C_9735_u128)
        );
        assert_eq!(id.encode(), SAMPLE);
        assert_eq!(Ksuid::decode(SAMPLE).unwrap(), id);
        assert_eq!(id.to_bytes(), SAMPLE_BYTES);
    }

    #[test]
    fn boundaries() {
        assert_eq!(Ksuid::NIL.encode(), "000000000000000000000000000");
        assert_eq!(Ksuid::MAX.encode(), "aWgEPTl1tmebfsQzFP4bxwgy80V");
        assert_eq!(Ksuid::NIL.to_bytes(), [0; 20]);
        assert_eq!(Ksuid::MAX.to_bytes(), [0xFF; 20]);
        assert!(Ksuid::NIL.is_nil());
        assert!(!Ksuid::MAX.is_nil());
        assert_eq!(Ksuid::default(), Ksuid::NIL);
        assert_eq!(Ksuid::decode("aWgEPTl1tmebfsQzFP4bxwgy80V").unwrap(), Ksuid::MAX);
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert_eq!(
            Ksuid::decode(&SAMPLE[..26]),
            Err(Error::Base62Error(Base62Error::InvalidLength {
                len: 26,
                expected: 27
            }))
        );
        assert_eq!(
            Ksuid::decode(format!("{SAMPLE}0")),
            Err(Error::Base62Error(Base62Error::InvalidLength {
                len: 28,
                expected: 27
            }))
        );
        assert!(Ksuid::decode("").is_err());
    }

    #[test]
    fn decode_rejects_invalid_character() {
        assert_eq!(
            Ksuid::decode("0ujtsYcgvSTl8PAu!dqWYSMnLOv"),
            Err(Error::Base62Error(Base62Error::InvalidCharacter {
                byte: b'!',
                index: 16
            }))
        );
        // Multi-byte UTF-8 keeps the byte length check honest
        assert!(matches!(
            Ksuid::decode("0ujtsYcgvSTl8PAuAdqWYSMnLé"),
            Err(Error::Base62Error(Base62Error::InvalidCharacter { .. }))
        ));
    }

    #[test]
    fn decode_rejects_values_above_max() {
        for s in ["aWgEPTl1tmebfsQzFP4bxwgy80W", "zzzzzzzzzzzzzzzzzzzzzzzzzzz"] {
            assert_eq!(
                Ksuid::decode(s),
                Err(Error::Base62Error(Base62Error::DecodingOverflow { width: 20 }))
            );
        }
    }

    #[test]
    fn next_and_prev_step_payload() {
        let id = Ksuid::decode(SAMPLE).unwrap();
        assert_eq!(id.next(), "0ujtsYcgvSTl8PAuAdqWYSMnLOw");
        assert_eq!(id.prev(), "0ujtsYcgvSTl8PAuAdqWYSMnLOu");
        assert_eq!(id.next().prev(), id);
        assert_eq!(id.prev().next(), id);
        assert!(id.next() > id);
        assert!(id.prev() < id);
    }

    #[test]
    fn payload_overflow_carries_into_timestamp() {
        let id = Ksuid::from_components(0, Uint128::MAX);
        assert_eq!(id.encode(), "000007n42DGM5Tflk9n8mt7Fhc7");
        let next = id.next();
        assert_eq!(next, Ksuid::from_components(1, Uint128::ZERO));
        assert_eq!(next.encode(), "000007n42DGM5Tflk9n8mt7Fhc8");

        let id = Ksuid::from_components(2, Uint128::ZERO);
        assert_eq!(id.encode(), "00000Fa84QWiAxLXUJaHZmEVPEG");
        let prev = id.prev();
        assert_eq!(prev, Ksuid::from_components(1, Uint128::MAX));
        assert_eq!(prev.encode(), "00000Fa84QWiAxLXUJaHZmEVPEF");
    }

    #[test]
    fn stepping_wraps_at_extremes() {
        assert_eq!(Ksuid::MAX.next(), Ksuid::NIL);
        assert_eq!(Ksuid::NIL.prev(), Ksuid::MAX);
    }

    #[test]
    fn order_matches_bytes_and_text() {
        let mut ids: Vec<Ksuid> = [
            Ksuid::MAX,
            Ksuid::from_components(1, Uint128::ZERO),
            Ksuid::from_bytes(SAMPLE_BYTES),
            Ksuid::from_components(0, Uint128::MAX),
            Ksuid::NIL,
            Ksuid::from_components(107_608_047, Uint128::MAX),
        ]
        .to_vec();
        ids.sort();

        let mut by_bytes = ids.clone();
        by_bytes.sort_by_key(Ksuid::to_bytes);
        assert_eq!(ids, by_bytes);

        let mut by_text: Vec<String> = ids.iter().map(String::from).collect();
        by_text.sort();
        let text: Vec<String> = ids.iter().map(String::from).collect();
        assert_eq!(text, by_text);
    }

    #[test]
    fn slice_conversions() {
        assert_eq!(Ksuid::try_from_slice(&SAMPLE_BYTES).unwrap(), SAMPLE);
        assert_eq!(
            Ksuid::try_from(&SAMPLE_BYTES[..19]),
            Err(Error::InvalidLength {
                len: 19,
                expected: 20
            })
        );
        let bytes: [u8; 20] = Ksuid::from(SAMPLE_BYTES).into();
        assert_eq!(bytes, SAMPLE_BYTES);
    }

    #[test]
    fn string_conversions() {
        let id: Ksuid = SAMPLE.parse().unwrap();
        assert_eq!(Ksuid::try_from(SAMPLE).unwrap(), id);
        assert_eq!(format!("{id}"), SAMPLE);
        assert_eq!(String::from(id), SAMPLE);
        assert_eq!(String::from(&id), SAMPLE);
        assert!(id == SAMPLE);
        assert!(SAMPLE == id);
        assert!(id == String::from(SAMPLE));
        assert!(id != "not a ksuid");
    }

    #[test]
    fn debug_shows_fields() {
        let id = Ksuid::from_components(1, Uint128::ONE);
        let dbg = format!("{id:?}");
        assert!(dbg.starts_with("Ksuid { id: "));
        assert!(dbg.contains("timestamp: 1 (0x1)"));
        assert!(dbg.contains("payload: 0x00000000000000000000000000000001"));
    }

    #[test]
    fn unix_secs_conversions() {
        let id = Ksuid::decode(SAMPLE).unwrap();
        assert_eq!(id.unix_secs(), 1_507_608_047);

        let id = Ksuid::from_unix_secs_and_rand(1_507_608_047, &MockRand).unwrap();
        assert_eq!(id.timestamp(), 107_608_047);
        assert_eq!(id.payload(), Uint128::from(42_u128));

        assert_eq!(
            Ksuid::from_unix_secs(0, Uint128::ZERO),
            Err(Error::TimestampOutOfRange { unix_secs: 0 })
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn now_uses_current_time() {
        use crate::TimeSource;

        let before = crate::SystemClock.current_secs();
        let id = Ksuid::now().unwrap();
        let after = crate::SystemClock.current_secs();
        assert!((before..=after).contains(&id.unix_secs()));
        assert_ne!(Ksuid::now().unwrap().payload(), id.payload());

        let secs = id
            .datetime()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs();
        assert_eq!(secs, id.unix_secs());
    }
}
