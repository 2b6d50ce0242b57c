use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A trait for time sources that return a monotonic or wall-clock timestamp.
///
/// This abstraction allows you to plug in a real system clock, a monotonic
/// timer, or a mocked time source in tests.
///
/// The unit is **nanoseconds** relative to the Unix epoch. Instants before the
/// epoch are negative.
///
/// # Example
///
/// ```
/// use hexid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_nanos(&self) -> i64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_nanos(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in nanoseconds since the Unix epoch.
    fn current_nanos(&self) -> i64;
}

/// Converts a [`SystemTime`] to signed nanoseconds since the Unix epoch,
/// saturating at the bounds of `i64` (roughly the years 1677 and 2262).
#[must_use]
pub fn unix_nanos(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_nanos()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_nanos())
            .map(|n| -n)
            .unwrap_or(i64::MIN),
    }
}

/// Inverse of [`unix_nanos`].
#[must_use]
pub fn from_unix_nanos(nanos: i64) -> SystemTime {
    if nanos >= 0 {
        UNIX_EPOCH + Duration::from_nanos(nanos.unsigned_abs())
    } else {
        UNIX_EPOCH - Duration::from_nanos(nanos.unsigned_abs())
    }
}
