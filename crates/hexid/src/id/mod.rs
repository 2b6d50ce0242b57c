mod formatter;
mod hex_id;

pub use formatter::*;
pub use hex_id::*;
