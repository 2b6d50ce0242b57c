use super::{HEX_LEN, HexId};
use core::fmt;

/// A stack-allocated view over the canonical text form of a [`HexId`].
///
/// Produced by [`HexId::encode`]. Formatting or borrowing the text as `&str`
/// performs no heap allocation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexIdFormatter {
    buf: [u8; HEX_LEN],
}

impl HexIdFormatter {
    pub(crate) fn new(id: &HexId) -> Self {
        let mut buf = [0u8; HEX_LEN];
        hex::encode_to_slice(id.as_bytes(), &mut buf)
            .unwrap_or_else(|_| unreachable!("buffer is exactly twice the ID size"));
        Self { buf }
    }

    /// Returns the encoded text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `hex::encode_to_slice` only writes `[0-9a-f]`.
        unsafe { core::str::from_utf8_unchecked(&self.buf) }
    }

    /// Returns the encoded text as an owned `String`.
    #[must_use]
    pub fn as_string(&self) -> String {
        self.as_str().to_owned()
    }
}

impl fmt::Display for HexIdFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for HexIdFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl AsRef<str> for HexIdFormatter {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl core::ops::Deref for HexIdFormatter {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialEq<str> for HexIdFormatter {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for HexIdFormatter {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_lowercase_without_separators() {
        let id = HexId::from_bytes([
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0x01, 0x23, 0x45, 0x67, 0x89, 0xAB,
            0xCD, 0xEF,
        ]);
        let formatter = id.encode();
        assert_eq!(formatter, "0123456789abcdef0123456789abcdef");
        assert_eq!(formatter.len(), HexId::HEX_LEN);
        assert_eq!(format!("{formatter:?}"), "\"0123456789abcdef0123456789abcdef\"");
    }

    #[test]
    fn empty_encodes_as_zeros() {
        assert_eq!(HexId::EMPTY.encode().as_string(), "0".repeat(32));
    }
}
