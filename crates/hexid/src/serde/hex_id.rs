use crate::HexId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serializes as the canonical text form, e.g. `"0123456789abcdef0123456789abcdef"`.
impl Serialize for HexId {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(self.encode().as_str())
    }
}

/// Deserializes from the canonical text form, surfacing [`HexId::parse`]
/// errors unchanged.
impl<'de> Deserialize<'de> for HexId {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HexVisitor;

        impl serde::de::Visitor<'_> for HexVisitor {
            type Value = HexId;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a 32 character hex encoded string")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                HexId::parse(v).map_err(serde::de::Error::custom)
            }
        }

        d.deserialize_str(HexVisitor)
    }
}

/// Field adapter storing a [`HexId`] as its native `u128` integer.
///
/// ```
/// use hexid::{HexId, as_native_hexid};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Row {
///     #[serde(with = "as_native_hexid")]
///     id: HexId,
/// }
/// ```
pub mod as_native_hexid {
    use super::{Deserialize, Deserializer, Serialize, Serializer};
    use crate::HexId;

    /// Serialize an ID as its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &HexId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    /// Deserialize an ID from its native integer representation.
    ///
    /// Every `u128` is a valid ID, so only the underlying deserializer can
    /// fail.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying deserializer fails.
    pub fn deserialize<'de, D>(d: D) -> Result<HexId, D::Error>
    where
        D: Deserializer<'de>,
    {
        u128::deserialize(d).map(HexId::from_raw)
    }
}
