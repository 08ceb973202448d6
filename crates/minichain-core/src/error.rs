use thiserror::Error;

/// Why a candidate block was rejected. One variant per validation check,
/// so callers can tell a stale tip apart from a tampered payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("index mismatch: expected {expected}, candidate has {found}")]
    IndexMismatch { expected: u64, found: u64 },

    #[error("stored hash {stored} does not match recomputed hash {computed}")]
    HashMismatch { stored: String, computed: String },

    #[error("previous_hash {found} does not link to predecessor hash {expected}")]
    BrokenLink { expected: String, found: String },

    #[error("hash {hash} does not have {difficulty} leading zeros")]
    DifficultyNotMet { hash: String, difficulty: u32 },

    #[error("chain contains no blocks")]
    EmptyChain,
}
