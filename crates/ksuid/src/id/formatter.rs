use core::fmt;

use crate::{ENCODED_LENGTH, Ksuid};

/// A reusable builder that owns the base62 buffer and formats a [`Ksuid`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KsuidFormatter {
    buf: [u8; ENCODED_LENGTH],
}

impl KsuidFormatter {
    #[must_use]
    pub fn new(id: &Ksuid) -> Self {
        let mut buf = Ksuid::buf();
        id.inner_encode_to_buf(&mut buf);
        Self { buf }
    }

    /// Returns a `&str` view of the base62 encoding.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `self.buf` holds only base62 ASCII characters
        unsafe { core::str::from_utf8_unchecked(&self.buf) }
    }

    /// Returns an allocated `String` of the base62 encoding.
    #[allow(clippy::inherent_to_string_shadow_display)]
    #[must_use]
    pub fn to_string(&self) -> alloc::string::String {
        // SAFETY: `self.buf` holds only base62 ASCII characters
        unsafe { alloc::string::String::from_utf8_unchecked(self.buf.to_vec()) }
    }

    /// Consumes the builder and returns the raw buffer.
    #[must_use]
    pub const fn into_inner(self) -> [u8; ENCODED_LENGTH] {
        self.buf
    }
}

impl fmt::Display for KsuidFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for KsuidFormatter {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for KsuidFormatter {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for KsuidFormatter {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<alloc::string::String> for KsuidFormatter {
    fn eq(&self, other: &alloc::string::String) -> bool {
        self.as_str() == other.as_str()
    }
}

/// A builder that borrows a user-supplied buffer for base62 formatting.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KsuidFormatterRef<'a> {
    buf: &'a [u8; ENCODED_LENGTH],
}

impl<'a> KsuidFormatterRef<'a> {
    pub fn new(id: &Ksuid, buf: &'a mut [u8; ENCODED_LENGTH]) -> Self {
        id.inner_encode_to_buf(buf);
        Self { buf }
    }

    /// Returns a `&str` view of the base62 encoding.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `self.buf` holds only base62 ASCII characters
        unsafe { core::str::from_utf8_unchecked(self.buf) }
    }
}

impl fmt::Display for KsuidFormatterRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for KsuidFormatterRef<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<&str> for KsuidFormatterRef<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
