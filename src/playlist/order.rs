//! Traversal order generation.
//!
//! The playlist never reaches for a global RNG: it owns a `Shuffle`
//! implementation, which is either a seedable `SeededShuffle` or any closure
//! over the index slice (handy for deterministic tests).

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::types::TrackIndex;

/// Source of shuffled traversal orders.
pub trait Shuffle {
    /// Permute `order` in place.
    fn shuffle(&mut self, order: &mut [TrackIndex]);
}

impl<F> Shuffle for F
where
    F: FnMut(&mut [TrackIndex]),
{
    fn shuffle(&mut self, order: &mut [TrackIndex]) {
        self(order)
    }
}

/// Fisher-Yates over a seedable `StdRng`.
pub struct SeededShuffle {
    rng: StdRng,
}

impl SeededShuffle {
    /// Reproducible shuffles: the same seed yields the same sequence of orders.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for SeededShuffle {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Shuffle for SeededShuffle {
    fn shuffle(&mut self, order: &mut [TrackIndex]) {
        order.shuffle(&mut self.rng);
    }
}

/// `[0, len)` in ascending order.
pub fn identity_order(len: usize) -> Vec<TrackIndex> {
    (0..len).map(TrackIndex::new).collect()
}

/// True when `order` holds every index in `[0, len)` exactly once.
pub fn is_permutation(order: &[TrackIndex], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for idx in order {
        match seen.get_mut(idx.get()) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
