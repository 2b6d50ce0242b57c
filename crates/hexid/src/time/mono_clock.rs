use super::{TimeSource, unix_nanos};
use std::time::{Instant, SystemTime};

/// A monotonic time source that returns elapsed time since construction,
/// offset by the wall-clock time read at construction.
///
/// This avoids wall-clock adjustments (e.g., NTP or daylight savings changes)
/// while still aligning timestamps to the Unix epoch. Timestamps from
/// separate clocks, or separate processes, are only as comparable as their
/// construction-time wall-clock reads.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    start: Instant,
    epoch_offset: i64, // in nanoseconds
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    /// Anchors a new clock to the current wall-clock time.
    #[must_use]
    pub fn new() -> Self {
        Self::anchored_at(SystemTime::now())
    }

    /// Anchors a new clock so that "now" reads as `anchor`.
    ///
    /// # Example
    ///
    /// ```
    /// use hexid::{MonotonicClock, TimeSource};
    /// use std::time::UNIX_EPOCH;
    ///
    /// let clock = MonotonicClock::anchored_at(UNIX_EPOCH);
    /// let ts = clock.current_nanos();
    /// assert!(ts >= 0);
    /// ```
    #[must_use]
    pub fn anchored_at(anchor: SystemTime) -> Self {
        Self {
            start: Instant::now(),
            epoch_offset: unix_nanos(anchor),
        }
    }
}

impl TimeSource for MonotonicClock {
    fn current_nanos(&self) -> i64 {
        let elapsed = i64::try_from(self.start.elapsed().as_nanos()).unwrap_or(i64::MAX);
        self.epoch_offset.saturating_add(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn never_goes_backwards() {
        let clock = MonotonicClock::new();
        let mut last = clock.current_nanos();
        for _ in 0..1_000 {
            let now = clock.current_nanos();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn starts_at_anchor() {
        let anchor = UNIX_EPOCH + Duration::from_secs(1_000);
        let clock = MonotonicClock::anchored_at(anchor);
        let ts = clock.current_nanos();
        assert!(ts >= 1_000_000_000_000);
        // generous bound for slow CI
        assert!(ts < 1_060_000_000_000);
    }

    #[test]
    fn advances_with_elapsed_time() {
        let clock = MonotonicClock::new();
        let a = clock.current_nanos();
        std::thread::sleep(Duration::from_millis(2));
        let b = clock.current_nanos();
        assert!(b - a >= 2_000_000);
    }
}
