use super::{TimeSource, unix_nanos};
use std::time::SystemTime;

/// A wall-clock time source backed by [`SystemTime::now`].
///
/// Every call performs a clock read, so values follow NTP corrections and may
/// step backwards. Use [`MonotonicClock`] when that matters.
///
/// [`MonotonicClock`]: crate::time::MonotonicClock
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_nanos(&self) -> i64 {
        unix_nanos(SystemTime::now())
    }
}
