use std::hash::{Hash, Hasher};

use rand::prelude::*;

use crate::GameRng;

/// Construct a random number generator seeded by a hashable value.
///
/// The same seed value always produces the same sequence, so a seed printed
/// out by one run can be fed back in to reproduce it.
pub fn srng(seed: &(impl Hash + ?Sized)) -> GameRng {
    let mut h = crate::FastHasher::default();
    seed.hash(&mut h);
    GameRng::seed_from_u64(h.finish())
}

pub trait RngExt {
    /// Return true with probability `p`.
    ///
    /// Always consumes exactly one uniform sample from the generator, so
    /// sequences of chance rolls stay aligned regardless of `p`.
    fn chance(&mut self, p: f64) -> bool;
}

impl<T: Rng + ?Sized> RngExt for T {
    fn chance(&mut self, p: f64) -> bool {
        self.random::<f64>() < p
    }
}
