#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    HexId,
    rand::{RandSource, ThreadRandom},
    time::{SystemClock, TimeSource},
};

/// A stateless [`HexId`] generator with an injected clock and random source.
///
/// [`HexId::new`] is shorthand for a generator over [`SystemClock`] and
/// [`ThreadRandom`]. Build one explicitly to swap in a [`MonotonicClock`], or
/// deterministic sources in tests.
///
/// ## Features
/// - ✅ Thread-safe when `T` and `R` are
/// - ✅ Probabilistically unique (no coordination required)
/// - ✅ Time-prefixed (not monotonically increasing)
///
/// [`MonotonicClock`]: crate::time::MonotonicClock
#[derive(Clone, Debug, Default)]
pub struct HexIdGenerator<T = SystemClock, R = ThreadRandom>
where
    T: TimeSource,
    R: RandSource<u64>,
{
    time: T,
    rng: R,
}

impl<T, R> HexIdGenerator<T, R>
where
    T: TimeSource,
    R: RandSource<u64>,
{
    /// Creates a new [`HexIdGenerator`] with the provided time source and RNG.
    ///
    /// # Parameters
    /// - `time`: A [`TimeSource`] used to retrieve the current timestamp
    /// - `rng`: A [`RandSource`] used to generate random bits
    ///
    /// # Example
    /// ```
    /// use hexid::{HexIdGenerator, MonotonicClock, ThreadRandom};
    ///
    /// let generator = HexIdGenerator::new(MonotonicClock::default(), ThreadRandom);
    ///
    /// let id = generator.next_id();
    /// assert!(id.is_valid());
    /// ```
    pub const fn new(time: T, rng: R) -> Self {
        Self { time, rng }
    }

    /// Generates a new ID from one clock read and one random draw.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id(&self) -> HexId {
        HexId::from_timestamp_and_rand(self.time.current_nanos(), &self.rng)
    }

    pub fn time(&self) -> &T {
        &self.time
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MonotonicClock;
    use std::cell::Cell;
    use std::collections::HashSet;
    use std::sync::Arc;

    struct MockTime {
        nanos: i64,
    }

    impl TimeSource for MockTime {
        fn current_nanos(&self) -> i64 {
            self.nanos
        }
    }

    struct CountingRand {
        next: Cell<u64>,
    }

    impl RandSource<u64> for CountingRand {
        fn rand(&self) -> u64 {
            let n = self.next.get();
            self.next.set(n + 1);
            n
        }
    }

    #[test]
    fn uses_injected_sources() {
        let generator = HexIdGenerator::new(
            MockTime { nanos: 42 },
            CountingRand { next: Cell::new(7) },
        );

        let id1 = generator.next_id();
        let id2 = generator.next_id();

        assert_eq!(id1.timestamp(), 42);
        assert_eq!(id2.timestamp(), 42);
        assert_eq!(id1.random(), 7);
        assert_eq!(id2.random(), 8);
        assert_eq!(id1.to_string(), "000000000000002a0000000000000007");
        assert!(id1 < id2);
    }

    #[test]
    fn default_generator_produces_unique_ids() {
        let generator = HexIdGenerator::<SystemClock, ThreadRandom>::default();
        let ids: HashSet<HexId> = (0..1_000).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 1_000);
        assert!(!ids.contains(&HexId::EMPTY));
    }

    #[test]
    fn shared_across_threads() {
        let generator = Arc::new(HexIdGenerator::new(MonotonicClock::new(), ThreadRandom));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let generator = Arc::clone(&generator);
                std::thread::spawn(move || {
                    (0..256).map(|_| generator.next_id()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            for id in handle.join().expect("thread panicked") {
                assert!(ids.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(ids.len(), 4 * 256);
    }
}
