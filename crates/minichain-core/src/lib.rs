use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

pub mod constants;
pub mod error;
pub mod mine;

pub use error::ChainError;

use constants::{GENESIS_DATA, GENESIS_PREVIOUS_HASH};

/// One entry in the chain. Immutable once appended; validity is established
/// by the chain before a block is trusted, never at construction time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub previous_hash: String,
    /// Milliseconds since the unix epoch.
    pub timestamp: u64,
    pub data: String,
    pub hash: String,
    pub nonce: u64,
}

impl Block {
    pub fn new(
        index: u64,
        previous_hash: String,
        timestamp: u64,
        data: String,
        hash: String,
        nonce: u64,
    ) -> Self {
        Self {
            index,
            previous_hash,
            timestamp,
            data,
            hash,
            nonce,
        }
    }

    /// The fixed first block. Its hash field is left empty: genesis is
    /// axiomatically trusted and never validated as a "next block", so the
    /// first mined block links to the empty string.
    pub fn genesis() -> Self {
        Self::new(
            0,
            GENESIS_PREVIOUS_HASH.to_string(),
            unix_millis(),
            GENESIS_DATA.to_string(),
            String::new(),
            0,
        )
    }
}

/// SHA-256 over the five block fields concatenated in this exact order,
/// integers rendered as base-10 text, no separators. This is the wire
/// contract: anything that must reproduce hashes has to match it byte
/// for byte.
pub fn calculate_hash(
    index: u64,
    previous_hash: &str,
    timestamp: u64,
    data: &str,
    nonce: u64,
) -> String {
    let preimage = format!("{index}{previous_hash}{timestamp}{data}{nonce}");
    let mut hasher = Sha256::new();
    hasher.update(preimage.as_bytes());
    hex::encode(hasher.finalize())
}

/// Recomputes a block's hash from its own fields, ignoring the stored hash.
pub fn hash_for_block(block: &Block) -> String {
    calculate_hash(
        block.index,
        &block.previous_hash,
        block.timestamp,
        &block.data,
        block.nonce,
    )
}

pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_millis() as u64
}

pub mod pow {
    /// Number of leading '0' characters in `hash`. Stops at the first
    /// non-zero character or at the end of the string.
    pub fn count_leading_zeros(hash: &str) -> u32 {
        hash.chars().take_while(|c| *c == '0').count() as u32
    }

    /// True iff the hash starts with at least `difficulty` '0' characters.
    /// Difficulty 0 is trivially satisfied; a hash shorter than `difficulty`
    /// can never satisfy it.
    pub fn meets_difficulty(hash: &str, difficulty: u32) -> bool {
        count_leading_zeros(hash) >= difficulty
    }
}

pub mod chain {
    use super::*;
    use crate::constants::POW_DIFFICULTY;
    use crate::mine::generate_next_block;
    use crate::pow::meets_difficulty;

    /// The canonical block sequence. Always holds at least the genesis block;
    /// the only mutation is an append gated by full candidate validation.
    #[derive(Clone, Debug)]
    pub struct Chain {
        blocks: Vec<Block>,
        difficulty: u32,
    }

    impl Chain {
        pub fn new() -> Self {
            Self::with_difficulty(POW_DIFFICULTY)
        }

        pub fn with_difficulty(difficulty: u32) -> Self {
            Self {
                blocks: vec![Block::genesis()],
                difficulty,
            }
        }

        pub fn blocks(&self) -> &[Block] {
            &self.blocks
        }

        pub fn len(&self) -> usize {
            self.blocks.len()
        }

        pub fn is_empty(&self) -> bool {
            self.blocks.is_empty()
        }

        pub fn difficulty(&self) -> u32 {
            self.difficulty
        }

        /// The last block in the sequence. `EmptyChain` is structurally
        /// unreachable given the genesis invariant but checked anyway.
        pub fn tip(&self) -> Result<&Block, ChainError> {
            self.blocks.last().ok_or(ChainError::EmptyChain)
        }

        /// Runs the four validation checks in order and reports the first
        /// failure: index continuity, hash recomputation, linkage, difficulty.
        pub fn check_next_block(
            &self,
            candidate: &Block,
            predecessor: &Block,
        ) -> Result<(), ChainError> {
            if candidate.index != predecessor.index + 1 {
                return Err(ChainError::IndexMismatch {
                    expected: predecessor.index + 1,
                    found: candidate.index,
                });
            }

            let computed = hash_for_block(candidate);
            if computed != candidate.hash {
                return Err(ChainError::HashMismatch {
                    stored: candidate.hash.clone(),
                    computed,
                });
            }

            if predecessor.hash != candidate.previous_hash {
                return Err(ChainError::BrokenLink {
                    expected: predecessor.hash.clone(),
                    found: candidate.previous_hash.clone(),
                });
            }

            if !meets_difficulty(&candidate.hash, self.difficulty) {
                return Err(ChainError::DifficultyNotMet {
                    hash: candidate.hash.clone(),
                    difficulty: self.difficulty,
                });
            }

            Ok(())
        }

        pub fn is_valid_next_block(&self, candidate: &Block, predecessor: &Block) -> bool {
            self.check_next_block(candidate, predecessor).is_ok()
        }

        /// Mines a block for `data` and appends it. Blocks the calling thread
        /// until the proof-of-work search succeeds. On any validation failure
        /// the error is propagated and the chain is left unchanged.
        pub fn mine(&mut self, data: &str) -> Result<Block, ChainError> {
            let tip = self.tip()?;
            let candidate = generate_next_block(tip, data, self.difficulty);
            self.append(candidate.clone())?;
            Ok(candidate)
        }

        /// Append-or-reject. No partial state: either the candidate passes
        /// all four checks and becomes the new tip, or nothing changes.
        pub(crate) fn append(&mut self, candidate: Block) -> Result<(), ChainError> {
            let tip = self.tip()?;
            self.check_next_block(&candidate, tip)?;
            self.blocks.push(candidate);
            Ok(())
        }
    }

    impl Default for Chain {
        fn default() -> Self {
            Self::new()
        }
    }
}
