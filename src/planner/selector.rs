//! Candidate selector
//!
//! Sampling without replacement from a filtered pool.

use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle a copy of `pool` and keep the first `min(k, pool.len())` entries
pub fn select<T: Clone, R: Rng + ?Sized>(pool: &[T], k: usize, rng: &mut R) -> Vec<T> {
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(k);
    shuffled
}
