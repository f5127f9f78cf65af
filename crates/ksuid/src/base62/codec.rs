use alloc::{string::String, vec, vec::Vec};

use crate::base62::Base62Error;

/// The 62 base62 digits in ascending order: digits, then uppercase, then
/// lowercase. Because this matches ASCII order, fixed-width encodings sort
/// lexicographically in numeric order.
pub const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BASE: u32 = 62;
const NO_VALUE: u8 = 255;

/// Lookup table for base62 decoding
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0;
    while i < BASE62_ALPHABET.len() {
        lut[BASE62_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
};

/// Returns the numeric value (0..=61) of a base62 digit, or `None` if the byte
/// is outside the alphabet.
#[must_use]
pub const fn base62_digit_value(byte: u8) -> Option<u8> {
    match LOOKUP[byte as usize] {
        NO_VALUE => None,
        value => Some(value),
    }
}

/// Encodes a big-endian byte sequence as a fixed-width base62 string, writing
/// ASCII into `out`.
///
/// The output width is `out.len()`. The value is produced by repeated long
/// division by 62, least significant digit first, written from the end of
/// `out` backward; any leading positions left over are filled with `'0'`.
///
/// # Errors
///
/// Returns [`Base62Error::EncodingOverflow`] if the value of `input` needs more
/// than `out.len()` digits. `out` is left partially written in that case.
///
/// # Example
///
/// ```
/// use ksuid::encode_base62;
///
/// let mut out = [0_u8; 6];
/// encode_base62(&[1, 2, 3, 4], &mut out).unwrap();
/// assert_eq!(&out, b"018wom");
/// ```
pub fn encode_base62(input: &[u8], out: &mut [u8]) -> Result<(), Base62Error> {
    let width = out.len();
    let mut offset = width;

    // Leading zero bytes contribute nothing but would each cost a division
    // pass, so the dividend starts at the first significant byte.
    let start = input.iter().position(|&b| b != 0).unwrap_or(input.len());
    let mut dividend = input[start..].to_vec();
    let mut quotient = Vec::with_capacity(dividend.len());

    while !dividend.is_empty() {
        quotient.clear();
        let mut remainder = 0_u32;
        for &digit in &dividend {
            let acc = (remainder << 8) | u32::from(digit);
            let q = acc / BASE;
            remainder = acc % BASE;
            if !quotient.is_empty() || q != 0 {
                quotient.push(q as u8);
            }
        }

        if offset == 0 {
            return Err(Base62Error::EncodingOverflow { width });
        }
        offset -= 1;
        out[offset] = BASE62_ALPHABET[remainder as usize];

        core::mem::swap(&mut dividend, &mut quotient);
    }

    out[..offset].fill(BASE62_ALPHABET[0]);
    Ok(())
}

/// Decodes a fixed-width base62 string into a big-endian byte sequence of
/// `out.len()` bytes.
///
/// Every character is validated before any arithmetic happens. The value is
/// produced by repeated long division of the base62 digits by 256, least
/// significant byte first, written from the end of `out` backward; leading
/// bytes left over are zeroed.
///
/// # Errors
///
/// - [`Base62Error::InvalidCharacter`] if a byte is outside `0-9A-Za-z`.
/// - [`Base62Error::DecodingOverflow`] if the value needs more than
///   `out.len()` bytes.
///
/// # Example
///
/// ```
/// use ksuid::{decode_base62, Base62Error};
///
/// let mut out = [0_u8; 4];
/// decode_base62(b"018wom", &mut out).unwrap();
/// assert_eq!(out, [1, 2, 3, 4]);
///
/// let mut small = [0_u8; 2];
/// assert_eq!(
///     decode_base62(b"zzz", &mut small),
///     Err(Base62Error::DecodingOverflow { width: 2 })
/// );
/// ```
pub fn decode_base62(input: &[u8], out: &mut [u8]) -> Result<(), Base62Error> {
    let width = out.len();
    let mut offset = width;

    let mut dividend = Vec::with_capacity(input.len());
    for (index, &byte) in input.iter().enumerate() {
        let Some(value) = base62_digit_value(byte) else {
            return Err(Base62Error::InvalidCharacter { byte, index });
        };
        if !dividend.is_empty() || value != 0 {
            dividend.push(value);
        }
    }
    let mut quotient = Vec::with_capacity(dividend.len());

    while !dividend.is_empty() {
        quotient.clear();
        let mut remainder = 0_u32;
        for &digit in &dividend {
            let acc = remainder * BASE + u32::from(digit);
            let q = acc >> 8;
            remainder = acc & 0xFF;
            if !quotient.is_empty() || q != 0 {
                quotient.push(q as u8);
            }
        }

        if offset == 0 {
            return Err(Base62Error::DecodingOverflow { width });
        }
        offset -= 1;
        out[offset] = remainder as u8;

        core::mem::swap(&mut dividend, &mut quotient);
    }

    out[..offset].fill(0);
    Ok(())
}

/// Allocating variant of [`encode_base62`] producing a `width`-character
/// string.
///
/// # Errors
///
/// See [`encode_base62`].
pub fn encode_base62_to_string(input: &[u8], width: usize) -> Result<String, Base62Error> {
    let mut out = vec![0_u8; width];
    encode_base62(input, &mut out)?;
    // The buffer only ever holds bytes from `BASE62_ALPHABET`.
    Ok(out.into_iter().map(char::from).collect())
}

/// Allocating variant of [`decode_base62`] producing `len` bytes.
///
/// # Errors
///
/// See [`decode_base62`].
pub fn decode_base62_to_vec(input: impl AsRef<[u8]>, len: usize) -> Result<Vec<u8>, Base62Error> {
    let mut out = vec![0_u8; len];
    decode_base62(input.as_ref(), &mut out)?;
    Ok(out)
}
