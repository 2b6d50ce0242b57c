use super::RandSource;
use rand::{Rng, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), seeded from the
/// operating system and reseeded periodically.
///
/// Each OS thread has its own RNG instance, so calls from multiple threads are
/// contention-free. This type does not store the RNG; it accesses the
/// thread-local generator on each call, which makes it `Send + Sync`.
///
/// # Panics
///
/// The first call on a thread panics if the operating system cannot provide
/// seed entropy. No ID is produced from an unseeded generator.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource<u64> for ThreadRandom {
    fn rand(&self) -> u64 {
        rng().random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn draws_differ() {
        let rng = ThreadRandom;
        let draws: HashSet<u64> = (0..64).map(|_| rng.rand()).collect();
        assert_eq!(draws.len(), 64);
    }

    #[test]
    fn usable_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| ThreadRandom.rand()))
            .collect();
        let draws: HashSet<u64> = handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect();
        assert_eq!(draws.len(), 4);
    }
}
