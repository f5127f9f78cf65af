use alloc::string::String;

use crate::{Config, Ksuid, PAYLOAD_BYTES, Result, Uint128, decode_hex, encode_hex};

/// The `{timestamp, payload}` record exchanged with callers that do not handle
/// raw binary.
///
/// - `timestamp` is Unix time in **milliseconds**. KSUIDs only carry whole
///   seconds, so this is always a multiple of 1000 when produced here, and any
///   sub-second part is truncated when read back.
/// - `payload` is the 16-byte payload as 32 lowercase hex characters.
///   Uppercase is accepted on input.
///
/// # Example
///
/// ```
/// use ksuid::{Config, Ksuid, KsuidParts};
///
/// let id: Ksuid = "0ujtsYcgvSTl8PAuAdqWYSMnLOv".parse().unwrap();
/// let parts = KsuidParts::from_ksuid(&id, &Config::default());
/// assert_eq!(parts.timestamp, 1_507_608_047_000);
/// assert_eq!(parts.payload, "b5a1cd34b5f99d1154fb6853345c9735");
/// assert_eq!(parts.to_ksuid(&Config::default()).unwrap(), id);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct KsuidParts {
    /// Unix time in milliseconds.
    pub timestamp: u64,
    /// Lowercase hex payload.
    pub payload: String,
}

impl KsuidParts {
    /// Splits `id` into a parts record under `config`'s epoch.
    #[must_use]
    pub fn from_ksuid(id: &Ksuid, config: &Config) -> Self {
        Self {
            timestamp: config
                .unix_secs_from_timestamp(id.timestamp())
                .saturating_mul(1000),
            payload: encode_hex(&id.payload().to_be_bytes()),
        }
    }

    /// Reassembles a KSUID under `config`'s epoch.
    ///
    /// # Errors
    ///
    /// - [`crate::Error::TimestampOutOfRange`] if the timestamp precedes the
    ///   epoch or lies past the 32-bit range.
    /// - [`crate::Error::HexError`] if the payload is not exactly 32 hex
    ///   characters.
    pub fn to_ksuid(&self, config: &Config) -> Result<Ksuid> {
        let timestamp = config.timestamp_from_unix_secs(self.timestamp / 1000)?;
        let mut payload = [0_u8; PAYLOAD_BYTES];
        payload.copy_from_slice(&decode_hex(&self.payload, PAYLOAD_BYTES)?);
        Ok(Ksuid::from_components(timestamp, Uint128::from_be_bytes(payload)))
    }
}
