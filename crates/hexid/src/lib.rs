//! # hexid
//!
//! A 128-bit identifier made of a nanosecond timestamp followed by 64 bits of
//! cryptographically secure randomness, rendered as 32 lowercase hex
//! characters.
//!
//! ```text
//!  Byte Index:  0                 7 8                 15
//!               +-------------------+-------------------+
//!  Field:       | timestamp (i64 BE)|   random (u64)    |
//!               +-------------------+-------------------+
//! ```
//!
//! ```
//! use hexid::HexId;
//!
//! let id = HexId::new();
//! assert!(id.is_valid());
//!
//! let text = id.to_string();
//! assert_eq!(text.len(), 32);
//! assert_eq!(HexId::parse(&text).unwrap(), id);
//! ```

mod error;
mod generator;
mod id;
pub mod rand;
mod scalar;
#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "rusqlite")]
mod sql;
pub mod time;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::rand::{RandSource, ThreadRandom};
pub use crate::scalar::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::time::{MonotonicClock, SystemClock, TimeSource};
