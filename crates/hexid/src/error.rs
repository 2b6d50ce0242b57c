use thiserror::Error;

/// A result type defaulting to [`enum@Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors `hexid` can produce.
///
/// Every failure is local and deterministic, so none of these are worth
/// retrying with the same input.
#[derive(Error, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The input is not valid hexadecimal: it has an odd length or contains a
    /// character outside `[0-9a-fA-F]`.
    #[error("parsing ID failed: {0}")]
    Decode(#[from] hex::FromHexError),

    /// The input is well-formed hex but does not decode to exactly
    /// [`HexId::SIZE`] bytes.
    ///
    /// [`HexId::SIZE`]: crate::HexId::SIZE
    #[error(
        "parsing ID failed: expected byte length to be {expected} bytes, but was {actual} bytes"
    )]
    Length { expected: usize, actual: usize },

    /// A persistence scalar was neither text nor null.
    #[error("expected a text value, got {kind}")]
    TypeMismatch { kind: &'static str },
}

impl Error {
    /// Returns true if the input was not valid hexadecimal.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Returns true if the input decoded to the wrong number of bytes.
    pub fn is_length(&self) -> bool {
        matches!(self, Self::Length { .. })
    }

    /// Returns true if a persistence scalar had an unsupported kind.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = Error::Length {
            expected: 16,
            actual: 17,
        };
        assert_eq!(
            err.to_string(),
            "parsing ID failed: expected byte length to be 16 bytes, but was 17 bytes"
        );

        let err = Error::TypeMismatch { kind: "integer" };
        assert_eq!(err.to_string(), "expected a text value, got integer");

        let err = Error::from(hex::FromHexError::OddLength);
        assert!(err.is_decode());
        assert!(err.to_string().starts_with("parsing ID failed: "));
    }

    #[test]
    fn predicates_are_exclusive() {
        let err = Error::TypeMismatch { kind: "real" };
        assert!(err.is_type_mismatch());
        assert!(!err.is_decode());
        assert!(!err.is_length());
    }
}
