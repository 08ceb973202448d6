use crate::{calculate_hash, pow::meets_difficulty, unix_millis, Block};
use tracing::info;

/// Searches for the next block on top of `tip` by iterating the nonce from 0
/// until the hash has at least `difficulty` leading zero characters. The
/// timestamp is refreshed on every attempt, so the search varies both fields.
///
/// This is a blocking, unbounded search with no cancellation point; callers
/// that need timeouts or interruption must run it on a thread they control.
pub fn generate_next_block(tip: &Block, data: &str, difficulty: u32) -> Block {
    let index = tip.index + 1;
    let previous_hash = tip.hash.clone();

    let mut nonce = 0u64;
    let mut timestamp = unix_millis();
    let mut hash = calculate_hash(index, &previous_hash, timestamp, data, nonce);

    while !meets_difficulty(&hash, difficulty) {
        nonce += 1;
        timestamp = unix_millis();
        hash = calculate_hash(index, &previous_hash, timestamp, data, nonce);
    }

    info!("mined block {} with nonce {} and hash {}", index, nonce, hash);

    Block::new(index, previous_hash, timestamp, data.to_string(), hash, nonce)
}
