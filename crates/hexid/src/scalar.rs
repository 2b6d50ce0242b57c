//! The boundary between [`HexId`] and column-oriented persistence layers.
//!
//! Drivers translate their native value type into a [`Scalar`] and hand it to
//! [`HexId::from_scalar`], which dispatches on the kind explicitly. IDs are
//! always written as text.

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Error, HexId, Result};

/// A single value read from or written to a persistence layer.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Null,
    Text(String),
    Integer(i64),
    Real(f64),
    Blob(Vec<u8>),
}

impl Scalar {
    /// Returns the name of this value's kind, as used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Blob(_) => "blob",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl HexId {
    /// Returns the value to store for this ID: its canonical text.
    #[must_use]
    pub fn to_scalar(&self) -> Scalar {
        Scalar::Text(self.encode().as_string())
    }

    /// Reads an ID back from a stored value.
    ///
    /// - [`Scalar::Null`] reads as [`HexId::EMPTY`]
    /// - [`Scalar::Text`] is handed to [`HexId::parse`]
    ///
    /// # Errors
    ///
    /// - [`Error::TypeMismatch`] for any other kind; no coercion is attempted
    /// - any error from [`HexId::parse`]
    #[cfg_attr(feature = "tracing", instrument(level = "trace", err))]
    pub fn from_scalar(value: &Scalar) -> Result<Self> {
        match value {
            Scalar::Null => Ok(Self::EMPTY),
            Scalar::Text(text) => Self::parse(text),
            other => Err(Error::TypeMismatch { kind: other.kind() }),
        }
    }

    /// Replaces `self` with the ID read from `value`.
    ///
    /// # Errors
    ///
    /// Same as [`HexId::from_scalar`]. `self` is left untouched on error, but
    /// callers should not treat it as meaningful.
    pub fn scan(&mut self, value: &Scalar) -> Result<()> {
        *self = Self::from_scalar(value)?;
        Ok(())
    }
}

impl From<HexId> for Scalar {
    fn from(id: HexId) -> Self {
        id.to_scalar()
    }
}

impl From<Option<HexId>> for Scalar {
    fn from(id: Option<HexId>) -> Self {
        id.map_or(Self::Null, |id| id.to_scalar())
    }
}

impl TryFrom<&Scalar> for HexId {
    type Error = Error;

    fn try_from(value: &Scalar) -> Result<Self> {
        Self::from_scalar(value)
    }
}

impl TryFrom<Scalar> for HexId {
    type Error = Error;

    fn try_from(value: Scalar) -> Result<Self> {
        Self::from_scalar(&value)
    }
}
