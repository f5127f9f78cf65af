use alloc::{string::String, vec, vec::Vec};

use crate::hex::HexError;

const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";
const NO_VALUE: u8 = 255;

/// Lookup table for hex decoding, accepting both cases
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 16 {
        let c = HEX_LOWER[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_lowercase() {
            lut[c.to_ascii_uppercase() as usize] = i;
        }
        i += 1;
    }
    lut
};

/// Encodes bytes as lowercase hex, high nibble first.
///
/// # Example
///
/// ```
/// use ksuid::encode_hex;
///
/// assert_eq!(encode_hex(&[0x00, 0x0F, 0xA5, 0xFF]), "000fa5ff");
/// ```
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(char::from(HEX_LOWER[usize::from(b >> 4)]));
        out.push(char::from(HEX_LOWER[usize::from(b & 0x0F)]));
    }
    out
}

/// Encodes bytes as lowercase hex into `out`, which must hold exactly
/// `2 * bytes.len()` characters.
///
/// # Errors
///
/// Returns [`HexError::OddLength`] if `out` has any other length. Here the
/// variant describes the output buffer: `len` is `out.len()` and `expected` is
/// `bytes.len()`, so it is reported even when `out.len()` is even.
///
/// # Example
///
/// ```
/// use ksuid::encode_hex_to_buf;
///
/// let mut buf = [0_u8; 4];
/// encode_hex_to_buf(&[0xBE, 0xEF], &mut buf).unwrap();
/// assert_eq!(&buf, b"beef");
/// ```
pub fn encode_hex_to_buf(bytes: &[u8], out: &mut [u8]) -> Result<(), HexError> {
    if out.len() != bytes.len() * 2 {
        return Err(HexError::OddLength {
            len: out.len(),
            expected: bytes.len(),
        });
    }
    for (&b, pair) in bytes.iter().zip(out.chunks_exact_mut(2)) {
        pair[0] = HEX_LOWER[usize::from(b >> 4)];
        pair[1] = HEX_LOWER[usize::from(b & 0x0F)];
    }
    Ok(())
}

/// Decodes hex text into `out`, which fixes the expected byte count.
///
/// # Errors
///
/// - [`HexError::OddLength`] if `hex` is not exactly `2 * out.len()`
///   characters.
/// - [`HexError::InvalidCharacter`] on the first character that is not a hex
///   digit. Raw control bytes and non-ASCII input are rejected the same way.
pub fn decode_hex_to_buf(hex: impl AsRef<[u8]>, out: &mut [u8]) -> Result<(), HexError> {
    let hex = hex.as_ref();
    if hex.len() != out.len() * 2 {
        return Err(HexError::OddLength {
            len: hex.len(),
            expected: out.len(),
        });
    }

    for (i, (pair, byte)) in hex.chunks_exact(2).zip(out.iter_mut()).enumerate() {
        let hi = nibble(pair[0], i * 2)?;
        let lo = nibble(pair[1], i * 2 + 1)?;
        *byte = (hi << 4) | lo;
    }
    Ok(())
}

/// Decodes hex text into exactly `expected_len` bytes.
///
/// # Errors
///
/// See [`decode_hex_to_buf`].
///
/// # Example
///
/// ```
/// use ksuid::{decode_hex, HexError};
///
/// assert_eq!(decode_hex("00FFa5", 3).unwrap(), vec![0x00, 0xFF, 0xA5]);
/// assert_eq!(
///     decode_hex("abc", 2),
///     Err(HexError::OddLength { len: 3, expected: 2 })
/// );
/// ```
pub fn decode_hex(hex: impl AsRef<[u8]>, expected_len: usize) -> Result<Vec<u8>, HexError> {
    let mut out = vec![0_u8; expected_len];
    decode_hex_to_buf(hex, &mut out)?;
    Ok(out)
}

#[inline]
fn nibble(byte: u8, index: usize) -> Result<u8, HexError> {
    match LOOKUP[usize::from(byte)] {
        NO_VALUE => Err(HexError::InvalidCharacter { byte, index }),
        value => Ok(value),
    }
}
