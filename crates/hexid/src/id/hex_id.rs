use super::HexIdFormatter;
use crate::{
    Error, Result,
    rand::{RandSource, ThreadRandom},
    time::{SystemClock, TimeSource, from_unix_nanos, unix_nanos},
};
use core::{fmt, str::FromStr};
use std::time::SystemTime;

#[cfg(feature = "tracing")]
use tracing::instrument;

pub(crate) const ID_SIZE: usize = 16;
pub(crate) const HEX_LEN: usize = ID_SIZE * 2;

/// A 128-bit identifier: a big-endian nanosecond timestamp followed by 64
/// random bits.
///
/// ```text
///  Bit Index:  127              64 63               0
///              +------------------+-----------------+
///  Field:      | timestamp (64)   | random (64)     |
///              +------------------+-----------------+
///              |<-- MSB -- 128 bits -- LSB -->      |
/// ```
///
/// The timestamp is the signed number of nanoseconds since the Unix epoch,
/// stored as its two's complement bit pattern.
///
/// Validity is purely structural: [`HexId::EMPTY`] (all zero bits) is the only
/// invalid value. Any other 16 bytes, however they were produced, form a valid
/// ID.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct HexId {
    bytes: [u8; ID_SIZE],
}

impl HexId {
    /// Size of an ID in bytes.
    pub const SIZE: usize = ID_SIZE;
    /// Length of the canonical text form.
    pub const HEX_LEN: usize = HEX_LEN;

    pub const RANDOM_BITS: u32 = 64;
    pub const TIMESTAMP_BITS: u32 = 64;
    pub const RANDOM_SHIFT: u32 = 0;
    pub const TIMESTAMP_SHIFT: u32 = Self::RANDOM_SHIFT + Self::RANDOM_BITS;

    /// The empty ID: 128 zero bits. This is also the [`Default`].
    pub const EMPTY: Self = Self {
        bytes: [0; Self::SIZE],
    };

    /// Generates a new ID from the current wall-clock time and the built-in
    /// [`ThreadRandom`] source.
    ///
    /// This convenience constructor keeps no state. Two calls within the same
    /// nanosecond still differ in their 64 random bits with overwhelming
    /// probability.
    ///
    /// # Panics
    ///
    /// Panics if the operating system cannot seed the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::from_timestamp_and_rand(SystemClock.current_nanos(), &ThreadRandom)
    }

    /// Packs a timestamp and a random value into an ID.
    #[must_use]
    pub const fn from_components(timestamp: i64, random: u64) -> Self {
        let t = (timestamp as u64 as u128) << Self::TIMESTAMP_SHIFT;
        let r = (random as u128) << Self::RANDOM_SHIFT;
        Self::from_raw(t | r)
    }

    /// Generates an ID from the given timestamp in nanoseconds since the Unix
    /// epoch, using the built-in [`ThreadRandom`] source.
    #[must_use]
    pub fn from_timestamp(timestamp: i64) -> Self {
        Self::from_timestamp_and_rand(timestamp, &ThreadRandom)
    }

    /// Generates an ID from the given timestamp in nanoseconds since the Unix
    /// epoch and a custom random source implementing [`RandSource`].
    #[must_use]
    pub fn from_timestamp_and_rand<R>(timestamp: i64, rng: &R) -> Self
    where
        R: RandSource<u64>,
    {
        Self::from_components(timestamp, rng.rand())
    }

    /// Generates an ID from the given `SystemTime`, using the built-in
    /// [`ThreadRandom`] source.
    #[must_use]
    pub fn from_datetime(datetime: SystemTime) -> Self {
        Self::from_datetime_and_rand(datetime, &ThreadRandom)
    }

    /// Generates an ID from the given `SystemTime` and a custom random source
    /// implementing [`RandSource`].
    #[must_use]
    pub fn from_datetime_and_rand<R>(datetime: SystemTime, rng: &R) -> Self
    where
        R: RandSource<u64>,
    {
        Self::from_timestamp_and_rand(unix_nanos(datetime), rng)
    }

    #[must_use]
    pub const fn from_bytes(bytes: [u8; Self::SIZE]) -> Self {
        Self { bytes }
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::SIZE] {
        &self.bytes
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; Self::SIZE] {
        self.bytes
    }

    /// Interprets a `u128` as the big-endian bytes of an ID.
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self {
            bytes: raw.to_be_bytes(),
        }
    }

    /// Interprets the bytes of this ID as a big-endian `u128`.
    #[must_use]
    pub const fn to_raw(&self) -> u128 {
        u128::from_be_bytes(self.bytes)
    }

    /// Extracts the timestamp, in nanoseconds since the Unix epoch.
    #[must_use]
    pub const fn timestamp(&self) -> i64 {
        (self.to_raw() >> Self::TIMESTAMP_SHIFT) as u64 as i64
    }

    /// Extracts the random component.
    #[must_use]
    pub const fn random(&self) -> u64 {
        (self.to_raw() >> Self::RANDOM_SHIFT) as u64
    }

    /// Returns this ID's timestamp as a [`SystemTime`].
    ///
    /// Only meaningful for IDs produced by one of the generating constructors.
    #[must_use]
    pub fn datetime(&self) -> SystemTime {
        from_unix_nanos(self.timestamp())
    }

    /// Returns `true` unless this is [`HexId::EMPTY`].
    ///
    /// This does not check that the ID was generated by this crate.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.is_empty()
    }

    /// Returns `true` if this is [`HexId::EMPTY`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Returns a formatter over the canonical text form: 32 lowercase hex
    /// characters, no prefix or separators.
    ///
    /// # Example
    ///
    /// ```
    /// use hexid::HexId;
    ///
    /// let id = HexId::from_raw(0x0123456789abcdef0123456789abcdef);
    /// assert_eq!(id.encode(), "0123456789abcdef0123456789abcdef");
    /// ```
    pub fn encode(&self) -> HexIdFormatter {
        HexIdFormatter::new(self)
    }

    /// Parses the canonical text form. Upper and lower case hex digits are
    /// both accepted.
    ///
    /// Callers that want the empty ID as the failure value can use
    /// `HexId::parse(s).unwrap_or_default()`.
    ///
    /// # Errors
    ///
    /// - [`Error::Decode`] if the input has an odd length or a non-hex
    ///   character
    /// - [`Error::Length`] if the input is valid hex but does not decode to
    ///   exactly [`HexId::SIZE`] bytes
    #[cfg_attr(feature = "tracing", instrument(level = "trace", err))]
    pub fn parse(text: &str) -> Result<Self> {
        let raw = hex::decode(text)?;
        let bytes: [u8; Self::SIZE] = raw.as_slice().try_into().map_err(|_| Error::Length {
            expected: Self::SIZE,
            actual: raw.len(),
        })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Parses a raw quoted token such as `"0123…"`.
    ///
    /// At most one leading and one trailing `"` are removed, each only if
    /// present. Quotes anywhere else are left in place and rejected by
    /// [`HexId::parse`].
    ///
    /// # Errors
    ///
    /// Same as [`HexId::parse`].
    pub fn parse_quoted(raw: &str) -> Result<Self> {
        let unquoted = raw.strip_prefix('"').unwrap_or(raw);
        let unquoted = unquoted.strip_suffix('"').unwrap_or(unquoted);
        Self::parse(unquoted)
    }
}

impl fmt::Display for HexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.encode(), f)
    }
}

impl fmt::Debug for HexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HexId").field(&self.encode().as_str()).finish()
    }
}

impl FromStr for HexId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for HexId {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl PartialEq<str> for HexId {
    fn eq(&self, other: &str) -> bool {
        Self::parse(other).map(|id| id == *self).unwrap_or(false)
    }
}

impl PartialEq<&str> for HexId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl From<HexId> for String {
    fn from(id: HexId) -> Self {
        id.encode().as_string()
    }
}

impl From<[u8; ID_SIZE]> for HexId {
    fn from(bytes: [u8; ID_SIZE]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<HexId> for [u8; ID_SIZE] {
    fn from(id: HexId) -> Self {
        id.to_bytes()
    }
}

impl AsRef<[u8]> for HexId {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
