//! Random sources used to fill the low 64 bits of a [`HexId`].
//!
//! [`HexId`]: crate::HexId

mod interface;
mod thread_random;

pub use interface::*;
pub use thread_random::*;
