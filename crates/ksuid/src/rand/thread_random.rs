use rand::{Rng, rng};

use crate::{RandSource, Uint128};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, ChaCha-based, and automatically reseeded periodically.
/// KSUID makes no cryptographic promise about payloads; choose a different
/// source if yours must be unguessable under a specific threat model.
///
/// Each OS thread has its own RNG instance, so calls from multiple threads are
/// contention-free. This type does **not** store the RNG itself; it simply
/// accesses the thread-local generator on each call, which makes it a
/// zero-sized, `Send + Sync` handle.
#[derive(Default, Copy, Clone, Debug)]
pub struct ThreadRandom;

impl RandSource<u64> for ThreadRandom {
    fn rand(&self) -> u64 {
        rng().random()
    }
}

impl RandSource<u128> for ThreadRandom {
    fn rand(&self) -> u128 {
        rng().random()
    }
}

impl RandSource<[u8; 16]> for ThreadRandom {
    fn rand(&self) -> [u8; 16] {
        rng().random()
    }
}

impl RandSource<Uint128> for ThreadRandom {
    fn rand(&self) -> Uint128 {
        let mut rng = rng();
        Uint128::from_words(rng.random(), rng.random())
    }
}
