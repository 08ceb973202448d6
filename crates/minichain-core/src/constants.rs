pub const HASH_SIZE: usize = 32;
pub const HASH_HEX_SIZE: usize = HASH_SIZE * 2;

/// Required number of leading '0' characters in a valid block hash.
pub const POW_DIFFICULTY: u32 = 3;

pub const GENESIS_PREVIOUS_HASH: &str = "0";
pub const GENESIS_DATA: &str = "genesis";
