//! Clocks used to stamp the high 64 bits of a [`HexId`].
//!
//! [`HexId`]: crate::HexId

mod interface;
mod mono_clock;
mod system_clock;

pub use interface::*;
pub use mono_clock::*;
pub use system_clock::*;
