//! Conversions between Unix time and 60-bit Gregorian tick counts.

#[cfg(not(feature = "std"))]
use core as std;

use std::time::Duration;

/// Maximum value of the 60-bit timestamp field.
pub(crate) const MAX_TIMESTAMP: u64 = (1 << 60) - 1;

/// Number of 100-nanosecond ticks from 1582-10-15T00:00:00Z to the Unix epoch.
const GREGORIAN_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

const TICKS_PER_SEC: u64 = 10_000_000;
const NANOS_PER_TICK: u32 = 100;

/// Converts a duration since the Unix epoch into ticks since the Gregorian epoch, wrapping around
/// the 60-bit range.
pub(crate) const fn ticks_from_unix(unix_time: Duration) -> u64 {
    let unix_ticks = unix_time
        .as_secs()
        .wrapping_mul(TICKS_PER_SEC)
        .wrapping_add((unix_time.subsec_nanos() / NANOS_PER_TICK) as u64);
    (unix_ticks & MAX_TIMESTAMP).wrapping_add(GREGORIAN_OFFSET) & MAX_TIMESTAMP
}

/// Converts ticks since the Gregorian epoch into a duration since the Unix epoch, returning `None`
/// for instants before 1970.
pub(crate) const fn unix_from_ticks(ticks: u64) -> Option<Duration> {
    match ticks.checked_sub(GREGORIAN_OFFSET) {
        Some(unix_ticks) => Some(ticks_to_duration(unix_ticks)),
        None => None,
    }
}

/// Returns the distance between a pre-1970 tick count and the Unix epoch.
#[cfg(feature = "std")]
pub(crate) const fn unix_from_ticks_before_epoch(ticks: u64) -> Duration {
    ticks_to_duration(GREGORIAN_OFFSET.saturating_sub(ticks))
}

const fn ticks_to_duration(ticks: u64) -> Duration {
    Duration::new(
        ticks / TICKS_PER_SEC,
        (ticks % TICKS_PER_SEC) as u32 * NANOS_PER_TICK,
    )
}

#[cfg(test)]
mod tests {
    use super::{ticks_from_unix, unix_from_ticks, Duration, GREGORIAN_OFFSET, MAX_TIMESTAMP};

    /// Maps the Unix epoch to the Gregorian offset
    #[test]
    fn maps_the_unix_epoch_to_the_gregorian_offset() {
        assert_eq!(ticks_from_unix(Duration::ZERO), GREGORIAN_OFFSET);
        assert_eq!(unix_from_ticks(GREGORIAN_OFFSET), Some(Duration::ZERO));
        assert_eq!(GREGORIAN_OFFSET / 10_000_000, 12_219_292_800);
    }

    /// Truncates to 100-nanosecond granularity
    #[test]
    fn truncates_to_100_nanosecond_granularity() {
        let ticks = ticks_from_unix(Duration::new(1_497_624_119, 1_234));
        assert_eq!(ticks, 0x01e7_52a1_f3b4_958c);
        assert_eq!(
            unix_from_ticks(ticks),
            Some(Duration::new(1_497_624_119, 1_200))
        );
    }

    /// Returns none before the Unix epoch
    #[test]
    fn returns_none_before_the_unix_epoch() {
        assert_eq!(unix_from_ticks(0), None);
        assert_eq!(unix_from_ticks(GREGORIAN_OFFSET - 1), None);
    }

    /// Wraps around the 60-bit range
    #[test]
    fn wraps_around_the_60_bit_range() {
        let far_future = Duration::from_secs((MAX_TIMESTAMP - GREGORIAN_OFFSET) / 10_000_000 + 1);
        assert!(ticks_from_unix(far_future) < GREGORIAN_OFFSET);
        assert!(ticks_from_unix(Duration::MAX) <= MAX_TIMESTAMP);
    }
}
