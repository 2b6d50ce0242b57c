//! SQLite column mapping via `rusqlite`.
//!
//! IDs are written as `TEXT`. Reads go through [`Scalar`], so `NULL` reads as
//! [`HexId::EMPTY`] and non-text columns fail with [`Error::TypeMismatch`].
//!
//! [`Error::TypeMismatch`]: crate::Error::TypeMismatch

use crate::{HexId, Scalar};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

impl From<ValueRef<'_>> for Scalar {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Self::Null,
            ValueRef::Integer(i) => Self::Integer(i),
            ValueRef::Real(f) => Self::Real(f),
            ValueRef::Text(t) => Self::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => Self::Blob(b.to_vec()),
        }
    }
}

impl ToSql for HexId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.encode().as_string()))
    }
}

impl FromSql for HexId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Self::from_scalar(&Scalar::from(value)).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}
