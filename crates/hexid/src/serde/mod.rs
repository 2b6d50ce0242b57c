mod hex_id;

pub use hex_id::*;
