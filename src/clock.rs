//! Monotonic 100-nanosecond tick source used by the time-based generators.

/// Number of 100-nanosecond intervals between the Gregorian reform epoch
/// (1582-10-15 00:00:00) and the Unix epoch (1970-01-01 00:00:00), the epoch
/// offset of version 1 identifiers. Version 0 identifiers count ticks from
/// the Unix epoch directly (offset 0).
pub const GREGORIAN_UNIX_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

/// Represents a tick source that masks wall-clock regressions and repeats.
///
/// A tick is one 100-nanosecond interval since a fixed epoch. The clock keeps
/// the last tick it handed out and falls back to that stored value whenever a
/// new reading does not advance past it, so callers never observe a tick
/// lower than a prior one from the same instance. The stored tick is only
/// reassigned by strictly greater readings; colliding readings do not advance
/// it, which makes rapid bursts of calls return repeated ticks when the
/// underlying clock fails to advance.
///
/// An instance hands out ticks through `&mut self`, so sharing one across
/// threads requires external synchronization; the process-wide generator
/// keeps its instance behind a mutex.
///
/// # Examples
///
/// ```rust
/// use uuid014::clock::TickClock;
///
/// let mut clock = TickClock::new();
/// assert_eq!(clock.next_tick_core(100), 100);
/// assert_eq!(clock.next_tick_core(50), 100);
/// assert_eq!(clock.next_tick_core(101), 101);
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TickClock {
    last_tick: u64,
}

impl TickClock {
    /// Creates a clock instance with no tick handed out yet.
    pub const fn new() -> Self {
        Self { last_tick: 0 }
    }

    /// Returns the tick for the current wall-clock reading shifted by
    /// `epoch_offset`, or the stored tick if the reading does not advance
    /// past it.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn next_tick(&mut self, epoch_offset: u64) -> u64 {
        self.next_tick_core(unix_100ns_now() + epoch_offset)
    }

    /// Returns the tick for the `now_100ns` reading passed (epoch offset
    /// included), or the stored tick if the reading does not advance past it.
    ///
    /// This method offers the low-level primitive to feed arbitrary readings,
    /// e.g. those of a fake clock in tests.
    pub fn next_tick_core(&mut self, now_100ns: u64) -> u64 {
        if now_100ns <= self.last_tick {
            self.last_tick
        } else {
            self.last_tick = now_100ns;
            now_100ns
        }
    }
}

/// Returns the current wall-clock reading as 100-nanosecond intervals since
/// the Unix epoch.
#[cfg(feature = "std")]
pub(crate) fn unix_100ns_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock may have gone backwards");
    d.as_secs() * 10_000_000 + d.subsec_nanos() as u64 / 100
}

#[cfg(test)]
mod tests {
    use super::{unix_100ns_now, TickClock, GREGORIAN_UNIX_OFFSET};

    /// Falls back to the stored tick when a reading does not advance
    #[test]
    fn falls_back_to_the_stored_tick_when_a_reading_does_not_advance() {
        let mut clock = TickClock::new();
        assert_eq!(clock.next_tick_core(100), 100);
        assert_eq!(clock.next_tick_core(100), 100);
        assert_eq!(clock.next_tick_core(50), 100);
        assert_eq!(clock.next_tick_core(99), 100);
        assert_eq!(clock.next_tick_core(101), 101);
        assert_eq!(clock.next_tick_core(100), 101);
    }

    /// Never yields a tick lower than a previously returned one
    #[test]
    fn never_yields_a_tick_lower_than_a_previously_returned_one() {
        let mut clock = TickClock::new();
        let mut prev = clock.next_tick(GREGORIAN_UNIX_OFFSET);
        for _ in 0..100_000 {
            let curr = clock.next_tick(GREGORIAN_UNIX_OFFSET);
            assert!(curr >= prev);
            prev = curr;
        }
    }

    /// Keeps the stored tick across alternating epoch offsets
    #[test]
    fn keeps_the_stored_tick_across_alternating_epoch_offsets() {
        // one clock serves both v0 and v1 calls; after a Gregorian-offset
        // tick, plain Unix-offset readings fall back to the stored value
        let mut clock = TickClock::new();
        let gregorian = clock.next_tick(GREGORIAN_UNIX_OFFSET);
        assert!(gregorian > GREGORIAN_UNIX_OFFSET);
        let unix = clock.next_tick(0);
        assert_eq!(unix, gregorian);
    }

    /// Reads a plausible number of intervals since the Unix epoch
    #[test]
    fn reads_a_plausible_number_of_intervals_since_the_unix_epoch() {
        // 2020-01-01 and 2100-01-01 in 100-ns intervals
        const LOWER: u64 = 15_778_368_000_000_000;
        const UPPER: u64 = 41_024_448_000_000_000;
        for _ in 0..1_000 {
            let now = unix_100ns_now();
            assert!(now > LOWER && now < UPPER);
        }
    }
}
