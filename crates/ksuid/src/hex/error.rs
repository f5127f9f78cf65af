use core::fmt;

/// Errors produced when decoding hex text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HexError {
    /// The text is not exactly two characters per expected byte. When
    /// encoding into a caller buffer, the buffer has the wrong width.
    OddLength {
        /// Length of the provided text.
        len: usize,
        /// Number of bytes the caller expects.
        expected: usize,
    },
    /// A character is not one of `0-9`, `a-f`, `A-F`.
    InvalidCharacter {
        /// The offending byte.
        byte: u8,
        /// Its position in the text.
        index: usize,
    },
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddLength { len, expected } => write!(
                f,
                "invalid hex length: {len} (expected {} characters)",
                expected * 2
            ),
            Self::InvalidCharacter { byte, index } => {
                write!(f, "invalid hex character {byte:#04x} at index {index}")
            }
        }
    }
}

impl core::error::Error for HexError {}
