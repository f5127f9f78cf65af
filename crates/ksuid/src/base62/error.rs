use core::fmt;

/// Errors produced by the fixed-width base62 codec.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Base62Error {
    /// The encoded input does not have the fixed width required (27 for a
    /// KSUID string).
    InvalidLength {
        /// Length of the provided input.
        len: usize,
        /// Length the decoder requires.
        expected: usize,
    },
    /// A byte outside the `0-9A-Za-z` alphabet was found.
    InvalidCharacter {
        /// The offending byte.
        byte: u8,
        /// Its position in the input.
        index: usize,
    },
    /// The input's value needs more base62 digits than the output holds.
    ///
    /// This indicates mismatched width constants, not bad user input.
    EncodingOverflow {
        /// Width of the output buffer, in characters.
        width: usize,
    },
    /// The decoded value needs more bytes than the output holds.
    DecodingOverflow {
        /// Width of the output buffer, in bytes.
        width: usize,
    },
}

impl fmt::Display for Base62Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { len, expected } => {
                write!(f, "invalid length: {len} (expected {expected})")
            }
            Self::InvalidCharacter { byte, index } => {
                write!(f, "invalid character {byte:#04x} at index {index}")
            }
            Self::EncodingOverflow { width } => {
                write!(f, "value does not fit in {width} base62 digits")
            }
            Self::DecodingOverflow { width } => {
                write!(f, "value does not fit in {width} bytes")
            }
        }
    }
}

impl core::error::Error for Base62Error {}
